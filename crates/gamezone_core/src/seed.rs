//! Sample articles for local demos and smoke checks.

use crate::model::article::{Article, ArticleDraft, ArticleId, UserId};
use crate::repo::article_repo::{ArticleRepository, RepoResult};
use log::info;

struct SampleArticle {
    title: &'static str,
    excerpt: &'static str,
    image_url: &'static str,
    category: &'static str,
    tags: &'static [&'static str],
    featured: bool,
}

const SAMPLES: &[SampleArticle] = &[
    SampleArticle {
        title: "The Future of Gaming: AI-Powered NPCs and Procedural Worlds",
        excerpt: "Exploring how artificial intelligence is revolutionizing game development, from intelligent non-player characters to infinitely generated game worlds that adapt to player behavior.",
        image_url: "https://images.unsplash.com/photo-1550745165-9bc0b252726f?w=1200&h=600&fit=crop",
        category: "Technology",
        tags: &["AI", "Gaming Technology", "Future", "NPCs"],
        featured: true,
    },
    SampleArticle {
        title: "Cyberpunk 2077: Phantom Liberty DLC Reviews Are In",
        excerpt: "The highly anticipated expansion brings back the cyberpunk world with enhanced gameplay mechanics, new storylines, and improved performance across all platforms.",
        image_url: "https://images.unsplash.com/photo-1542751371-adc38448a05e?w=800&h=600&fit=crop",
        category: "Reviews",
        tags: &["Cyberpunk", "DLC", "RPG", "CD Projekt Red"],
        featured: false,
    },
    SampleArticle {
        title: "CS2 Major Championship Finals: Team Liquid vs FaZe Clan",
        excerpt: "The most anticipated Counter-Strike 2 tournament of the year concludes with an epic showdown between two legendary teams competing for the $1M prize pool.",
        image_url: "https://images.unsplash.com/photo-1560419015-7c427e8ae5ba?w=800&h=600&fit=crop",
        category: "Esports",
        tags: &["CS2", "Esports", "Tournament", "Team Liquid"],
        featured: false,
    },
    SampleArticle {
        title: "PlayStation 5 Pro Specs Leaked: What to Expect",
        excerpt: "New console generation brings 8K gaming support, ray tracing improvements, and backwards compatibility with enhanced performance for existing PS5 titles.",
        image_url: "https://images.unsplash.com/photo-1606813907291-d86efa9b94db?w=800&h=600&fit=crop",
        category: "Console",
        tags: &["PlayStation", "PS5 Pro", "Console", "Sony"],
        featured: false,
    },
    SampleArticle {
        title: "Genshin Impact 4.2 Update: New Region Fontaine Explored",
        excerpt: "Dive into the underwater world of Fontaine with new characters, storylines, and innovative gameplay mechanics that revolutionize exploration.",
        image_url: "https://images.unsplash.com/photo-1511512578047-dfb367046420?w=800&h=600&fit=crop",
        category: "Mobile",
        tags: &["Genshin Impact", "Mobile Gaming", "RPG", "miHoYo"],
        featured: false,
    },
    SampleArticle {
        title: "NVIDIA RTX 5090 Benchmarks: Gaming Performance Revolution",
        excerpt: "The latest GPU flagship delivers unprecedented 4K gaming performance with AI-powered upscaling technology and ray tracing capabilities.",
        image_url: "https://images.unsplash.com/photo-1591488320449-011701bb6704?w=800&h=600&fit=crop",
        category: "PC",
        tags: &["NVIDIA", "RTX 5090", "GPU", "PC Gaming"],
        featured: false,
    },
    SampleArticle {
        title: "Valorant Champions 2024: Sentinels Dominate Tournament",
        excerpt: "The defending champions showcase incredible tactical gameplay and individual skill to secure their second consecutive world championship title.",
        image_url: "https://images.unsplash.com/photo-1542751110-97427bbecf20?w=800&h=600&fit=crop",
        category: "Esports",
        tags: &["Valorant", "Esports", "Sentinels", "Riot Games"],
        featured: false,
    },
];

/// Published drafts for every sample article, featured one first.
pub fn sample_drafts() -> Vec<ArticleDraft> {
    SAMPLES
        .iter()
        .map(|sample| ArticleDraft {
            title: sample.title.to_string(),
            content: format!("{}\n\nFull coverage to follow.", sample.excerpt),
            excerpt: Some(sample.excerpt.to_string()),
            image_url: Some(sample.image_url.to_string()),
            category: sample.category.to_string(),
            tags: sample.tags.iter().map(|tag| tag.to_string()).collect(),
            featured: sample.featured,
            published: true,
        })
        .collect()
}

/// Inserts every sample article owned by `author_id`.
pub fn seed_articles<R: ArticleRepository>(
    repo: &R,
    author_id: UserId,
) -> RepoResult<Vec<ArticleId>> {
    let ids = sample_drafts()
        .into_iter()
        .map(|draft| repo.insert_article(&Article::from_draft(draft, author_id)))
        .collect::<RepoResult<Vec<_>>>()?;
    info!("event=seed module=seed status=ok count={}", ids.len());
    Ok(ids)
}
