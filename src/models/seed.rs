//! Sample catalog loaded at startup

use super::{Category, NewResource, SkillLevel};

fn sample(
    title: &str,
    description: &str,
    category: Category,
    skill_level: SkillLevel,
    image_url: &str,
    resource_type: &str,
    video_url: Option<&str>,
) -> NewResource {
    NewResource {
        title: title.to_string(),
        description: description.to_string(),
        category,
        skill_level,
        image_url: image_url.to_string(),
        resource_type: resource_type.to_string(),
        video_url: video_url.map(str::to_string),
    }
}

/// One sample resource per category
pub fn seed_resources() -> Vec<NewResource> {
    vec![
        sample(
            "Introduction to Python Programming",
            "Learn the fundamentals of Python: variables, control flow, functions and data structures, with hands-on exercises.",
            Category::Programming,
            SkillLevel::Beginner,
            "https://images.unsplash.com/photo-1526379095098-d400fd0bf935",
            "Video Course",
            Some("https://www.youtube.com/watch?v=rfscVS0vtbw"),
        ),
        sample(
            "UI/UX Design Principles",
            "Master the core principles of user interface and user experience design, from layout and typography to usability testing.",
            Category::Design,
            SkillLevel::Intermediate,
            "https://images.unsplash.com/photo-1561070791-2526d30994b5",
            "Interactive Course",
            None,
        ),
        sample(
            "Startup Finance Essentials",
            "Understand cash flow, unit economics and fundraising so you can make confident financial decisions for an early-stage company.",
            Category::Business,
            SkillLevel::Beginner,
            "https://images.unsplash.com/photo-1554224155-6726b3ff858f",
            "eBook",
            None,
        ),
        sample(
            "Machine Learning with Scikit-Learn",
            "Build, evaluate and tune classical machine learning models on real datasets using the scikit-learn toolkit.",
            Category::DataScience,
            SkillLevel::Advanced,
            "https://images.unsplash.com/photo-1555949963-aa79dcee981c",
            "Video Course",
            Some("https://vimeo.com/76979871"),
        ),
        sample(
            "Linear Algebra Foundations",
            "Vectors, matrices, determinants and eigenvalues explained visually, with the intuition needed for graphics and machine learning.",
            Category::Mathematics,
            SkillLevel::Intermediate,
            "https://images.unsplash.com/photo-1635070041078-e363dbe005cb",
            "Lecture Series",
            Some("https://youtu.be/fNk_zzaMoSs"),
        ),
        sample(
            "Conversational Spanish",
            "Everyday Spanish for travellers and beginners: greetings, ordering food, asking for directions and small talk.",
            Category::LanguageLearning,
            SkillLevel::Beginner,
            "https://images.unsplash.com/photo-1543783207-ec64e4d95325",
            "Audio Course",
            None,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResourcePayload;
    use std::collections::HashSet;

    #[test]
    fn test_seed_covers_every_category() {
        let categories: HashSet<_> = seed_resources().iter().map(|r| r.category).collect();
        assert_eq!(categories.len(), Category::ALL.len());
    }

    #[test]
    fn test_seed_passes_validation() {
        for data in seed_resources() {
            let payload = ResourcePayload::from(data.clone());
            assert_eq!(payload.into_new_resource().unwrap(), data);
        }
    }
}
