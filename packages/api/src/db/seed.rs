//! First-run content seeding.
//!
//! Populates `learning_paths` and `events` on startup when they are empty, so a
//! fresh deployment has something to show on the home page. User-generated tables
//! (builds, forum, catalog) start empty and fill through the application.

use sqlx::PgPool;

struct SeedPath {
    title: &'static str,
    description: &'static str,
    difficulty: &'static str,
    duration: &'static str,
    modules: i32,
    enrolled: i32,
}

struct SeedEvent {
    title: &'static str,
    date: &'static str,
    time: &'static str,
    location: &'static str,
    image: &'static str,
    max_attendees: i32,
    description: &'static str,
}

const LEARNING_PATHS: &[SeedPath] = &[
    SeedPath {
        title: "PC Building Fundamentals",
        description: "Learn the essentials of building your first gaming PC from scratch",
        difficulty: "Beginner",
        duration: "4 weeks",
        modules: 12,
        enrolled: 234,
    },
    SeedPath {
        title: "Advanced Overclocking",
        description: "Master CPU and GPU overclocking for maximum performance",
        difficulty: "Advanced",
        duration: "6 weeks",
        modules: 18,
        enrolled: 156,
    },
    SeedPath {
        title: "Custom Water Cooling",
        description: "Design and install custom water cooling loops",
        difficulty: "Intermediate",
        duration: "5 weeks",
        modules: 15,
        enrolled: 189,
    },
    SeedPath {
        title: "RGB & Cable Management",
        description: "Create stunning aesthetics with proper cable management and RGB lighting",
        difficulty: "Beginner",
        duration: "2 weeks",
        modules: 8,
        enrolled: 412,
    },
];

const EVENTS: &[SeedEvent] = &[
    SeedEvent {
        title: "Monthly Build Workshop",
        date: "2025-02-15",
        time: "14:00 EST",
        location: "Online",
        image: "https://images.pexels.com/photos/3184639/pexels-photo-3184639.jpeg",
        max_attendees: 50,
        description: "Join us for a live PC building session where we assemble a complete gaming rig",
    },
    SeedEvent {
        title: "Troubleshooting Q&A",
        date: "2025-02-20",
        time: "18:00 EST",
        location: "Online",
        image: "https://images.pexels.com/photos/1181622/pexels-photo-1181622.jpeg",
        max_attendees: 100,
        description: "Bring your PC problems and get expert advice from our community",
    },
];

/// Insert seed rows into empty content tables. Idempotent: a non-empty table is
/// left untouched.
pub async fn seed_initial_content(pool: &PgPool) -> Result<(), sqlx::Error> {
    let (paths,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM learning_paths")
        .fetch_one(pool)
        .await?;
    if paths == 0 {
        for p in LEARNING_PATHS {
            sqlx::query(
                "INSERT INTO learning_paths (title, description, difficulty, duration, modules, enrolled)
                 VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(p.title)
            .bind(p.description)
            .bind(p.difficulty)
            .bind(p.duration)
            .bind(p.modules)
            .bind(p.enrolled)
            .execute(pool)
            .await?;
        }
        tracing::info!("seeded learning paths");
    }

    let (events,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM events")
        .fetch_one(pool)
        .await?;
    if events == 0 {
        for e in EVENTS {
            sqlx::query(
                "INSERT INTO events (title, date, time, location, image, attendees, max_attendees, description)
                 VALUES ($1, $2, $3, $4, $5, 0, $6, $7)",
            )
            .bind(e.title)
            .bind(e.date)
            .bind(e.time)
            .bind(e.location)
            .bind(e.image)
            .bind(e.max_attendees)
            .bind(e.description)
            .execute(pool)
            .await?;
        }
        tracing::info!("seeded events");
    }

    Ok(())
}
