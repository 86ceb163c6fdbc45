//! Sample content reset. Every seeded collection is cleared and refilled
//! inside one transaction so a failed seed leaves the old content intact.

use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, Set, TransactionTrait};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use models::{article, document, event, media, member, page};
use crate::errors::ServiceError;

/// Rows written per collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeedSummary {
    pub members: usize,
    pub pages: usize,
    pub articles: usize,
    pub events: usize,
    pub documents: usize,
    pub media: usize,
}

const MEMBERS: &[(&str, &str, &str)] = &[
    ("Ahmad Rizki", "Chair", "Core Board"),
    ("Siti Nurhaliza", "Vice Chair", "Core Board"),
    ("Muhammad Faisal", "Secretary", "Core Board"),
    ("Fatimah Zahra", "Treasurer", "Core Board"),
    ("Umar Abdullah", "Coordinator", "Education"),
    ("Aisyah Putri", "Member", "Education"),
    ("Hasan Ali", "Coordinator", "Outreach"),
    ("Khadijah Sari", "Member", "Outreach"),
    ("Ibrahim Yusuf", "Coordinator", "Social Affairs"),
    ("Maryam Dewi", "Member", "Social Affairs"),
    ("Yusuf Hakim", "Coordinator", "Media"),
    ("Zainab Aulia", "Member", "Media"),
    ("Bilal Rahman", "Member", "Education"),
    ("Salman Alfarisi", "Member", "Social Affairs"),
    ("Hafshah Lestari", "Member", "Media"),
];

fn sample_pages() -> Vec<(&'static str, &'static str, &'static str, &'static str, Vec<Value>)> {
    vec![
        (
            "home",
            "Welcome to our Association",
            "Growing knowledgeable and caring leaders together",
            "A student organization dedicated to education, outreach and community service.",
            vec![json!({
                "id": "features",
                "title": "Flagship Programs",
                "items": [
                    {"title": "Weekly Study Circle", "description": "Weekly sessions for study and personal growth"},
                    {"title": "Community Service", "description": "Social activities that help the surrounding community"},
                    {"title": "Training", "description": "Workshops that build soft skills"},
                    {"title": "Annual Event", "description": "A yearly gathering involving every member"}
                ]
            })],
        ),
        (
            "about",
            "About Us",
            "Get to know the association",
            "Founded to shape young people who are knowledgeable, principled and useful to society.",
            vec![
                json!({"id": "vision", "title": "Vision", "content": "To be the leading student organization in developing knowledgeable and principled young leaders."}),
                json!({"id": "mission", "title": "Mission", "items": [
                    "Run study programs for religious and general knowledge",
                    "Develop members' talents through creative activities",
                    "Build solidarity between members",
                    "Carry out social work that benefits the community"
                ]}),
            ],
        ),
        (
            "philosophy",
            "Philosophy",
            "The ideas behind the association",
            "Our name stands for compassion from above: sincerity and care in everything we do.",
            vec![json!({
                "id": "values",
                "title": "Core Values",
                "items": [
                    {"title": "Knowledge", "description": "Seeking knowledge is a duty we share"},
                    {"title": "Character", "description": "Good conduct reflects sound belief"},
                    {"title": "Brotherhood", "description": "Fellowship built on shared faith"},
                    {"title": "Trust", "description": "Responsibility for every task we accept"}
                ]
            })],
        ),
    ]
}

/// Clear and refill members, pages, articles, events, documents and media.
pub async fn seed_sample_content(db: &DatabaseConnection) -> Result<SeedSummary, ServiceError> {
    let txn = db.begin().await?;
    let summary = apply_seed(&txn).await?;
    txn.commit().await?;
    info!(event = "seed_completed", members = summary.members, pages = summary.pages, articles = summary.articles,
        events = summary.events, documents = summary.documents, media = summary.media);
    Ok(summary)
}

/// Seed statements against any connection; the caller owns the transaction.
pub async fn apply_seed<C: ConnectionTrait>(c: &C) -> Result<SeedSummary, ServiceError> {
    let now = Utc::now();
    let mut summary = SeedSummary::default();

    member::Entity::delete_many().exec(c).await?;
    let members: Vec<member::ActiveModel> = MEMBERS.iter().map(|(name, position, division)| member::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        position: Set(position.to_string()),
        division: Set(division.to_string()),
    }).collect();
    summary.members = members.len();
    member::Entity::insert_many(members).exec(c).await?;

    page::Entity::delete_many().exec(c).await?;
    let pages: Vec<page::ActiveModel> = sample_pages().into_iter().map(|(page_id, title, subtitle, description, sections)| page::ActiveModel {
        id: Set(Uuid::new_v4()),
        page_id: Set(page_id.to_string()),
        hero_title: Set(title.to_string()),
        hero_subtitle: Set(subtitle.to_string()),
        hero_description: Set(description.to_string()),
        hero_image: Set(String::new()),
        sections: Set(Value::Array(sections)),
        updated_at: Set(now.into()),
    }).collect();
    summary.pages = pages.len();
    page::Entity::insert_many(pages).exec(c).await?;

    article::Entity::delete_many().exec(c).await?;
    let articles = vec![
        ("Monthly Study: Deepening Everyday Practice", "monthly-study-everyday-practice",
         "This month's session covered ways to bring more care into daily routines.",
         "<p>We discussed how small habits shape character and shared practical tips for the weeks ahead.</p>",
         "https://images.unsplash.com/photo-1585036156171-384164a8c675?w=800", json!(["study", "practice"])),
        ("Community Service in a Remote Village", "community-service-remote-village",
         "Our team visited a remote village to support families in need.",
         "<p>The visit included food distribution, a free health check and activities for children.</p>",
         "https://images.unsplash.com/photo-1559027615-cd4628902d4a?w=800", json!(["social", "community"])),
    ];
    let articles: Vec<article::ActiveModel> = articles.into_iter().map(|(title, slug, summary_text, content, cover, tags)| article::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(title.to_string()),
        slug: Set(slug.to_string()),
        summary: Set(summary_text.to_string()),
        content: Set(content.to_string()),
        cover_image: Set(cover.to_string()),
        tags: Set(tags),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }).collect();
    summary.articles = articles.len();
    article::Entity::insert_many(articles).exec(c).await?;

    event::Entity::delete_many().exec(c).await?;
    let events = vec![
        ("Leadership Seminar", "leadership-seminar", "2025-07-15", "09:00 - 15:00", "Main Campus Hall",
         "A seminar on leadership with scholars and practitioners.", "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=800", 200),
        ("Public Speaking Workshop", "public-speaking-workshop", "2025-07-22", "13:00 - 17:00", "Multipurpose Room, 3rd Floor",
         "Hands-on training for presentation and communication skills.", "https://images.unsplash.com/photo-1475721027785-f74eccf877e2?w=800", 50),
    ];
    let events: Vec<event::ActiveModel> = events.into_iter().map(|(title, slug, date, time, location, description, banner, capacity)| event::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(title.to_string()),
        slug: Set(slug.to_string()),
        date: Set(date.to_string()),
        time: Set(time.to_string()),
        location: Set(location.to_string()),
        description: Set(description.to_string()),
        banner_image: Set(banner.to_string()),
        capacity: Set(capacity),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }).collect();
    summary.events = events.len();
    event::Entity::insert_many(events).exec(c).await?;

    document::Entity::delete_many().exec(c).await?;
    let documents = vec![
        ("New Member Guide", "new-member-guide", "Everything a new member needs to know", "<p>Welcome aboard! This guide walks you through how we work.</p>", "documentation"),
        ("Activity Report, Fall Semester 2024", "activity-report-fall-2024", "Summary of the semester's activities", "<p>A recap of every activity held this semester.</p>", "report"),
        ("Ramadan Program", "ramadan-program", "Activities held during Ramadan", "<p>The series of activities run during the holy month.</p>", "activity"),
    ];
    let documents: Vec<document::ActiveModel> = documents.into_iter().map(|(title, slug, description, content, doc_type)| document::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(title.to_string()),
        slug: Set(slug.to_string()),
        description: Set(description.to_string()),
        content: Set(content.to_string()),
        attachments: Set(json!([])),
        doc_type: Set(doc_type.to_string()),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }).collect();
    summary.documents = documents.len();
    document::Entity::insert_many(documents).exec(c).await?;

    media::Entity::delete_many().exec(c).await?;
    let media_rows = vec![
        ("Community Service Photos", "https://images.unsplash.com/photo-1559027615-cd4628902d4a?w=800", "Coverage of the community service trip"),
        ("Weekly Study Circle", "https://images.unsplash.com/photo-1585036156171-384164a8c675?w=800", "The weekly study circle in session"),
    ];
    let media_rows: Vec<media::ActiveModel> = media_rows.into_iter().map(|(title, url, description)| media::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(title.to_string()),
        media_type: Set("image".to_string()),
        url: Set(url.to_string()),
        description: Set(description.to_string()),
        created_at: Set(now.into()),
    }).collect();
    summary.media = media_rows.len();
    media::Entity::insert_many(media_rows).exec(c).await?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use sea_orm::PaginatorTrait;

    #[tokio::test]
    async fn seed_replaces_content_and_is_repeatable() {
        let Some(db) = get_db().await else { return };
        // Run inside a rolled-back transaction so parallel tests keep their rows.
        let txn = db.begin().await.unwrap();
        let first = apply_seed(&txn).await.unwrap();
        let second = apply_seed(&txn).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(member::Entity::find().count(&txn).await.unwrap() as usize, second.members);
        assert_eq!(page::Entity::find().count(&txn).await.unwrap(), 3);
        assert_eq!(document::Entity::find().count(&txn).await.unwrap(), 3);
        txn.rollback().await.unwrap();
    }
}
