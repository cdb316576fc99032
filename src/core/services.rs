//! # Service Catalog
//!
//! The services showcased in the card stack. Each service carries a short
//! card description plus the longer copy and feature list shown in the
//! detail view once a card is activated.

use serde::{Deserialize, Serialize};

use crate::core::card::Card;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub full_description: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub icon: Option<String>,
}

impl Service {
    pub fn to_card(&self) -> Card {
        let card = Card::new(&self.id, &self.title, &self.description);
        match &self.icon {
            Some(icon) => card.with_icon(icon),
            None => card,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceCatalog {
    services: Vec<Service>,
}

impl ServiceCatalog {
    pub fn new(services: Vec<Service>) -> Self {
        Self { services }
    }

    /// The six services offered out of the box.
    pub fn builtin() -> Self {
        Self::new(vec![
            service(
                "websites",
                "Website Development",
                "Professional websites that turn visitors into customers with custom design and SEO optimization",
                "We build professional, responsive websites tailored to your business needs. From simple landing pages to complex e-commerce platforms, we deliver solutions that drive results.",
                &[
                    "Custom design & development",
                    "Mobile-responsive layouts",
                    "SEO optimization",
                    "Fast loading speeds",
                    "Easy content management",
                ],
                "◎",
            ),
            service(
                "social",
                "Social Media Management",
                "Grow your audience with strategic content, daily posting, and community engagement across all platforms",
                "We handle your social media presence from strategy to execution. Our team creates engaging content, manages your profiles, and grows your audience across all major platforms.",
                &[
                    "Content strategy & planning",
                    "Daily posting & engagement",
                    "Community management",
                    "Analytics & reporting",
                    "Multi-platform coverage",
                ],
                "◍",
            ),
            service(
                "content",
                "Content Creation",
                "High-quality photos, videos, and graphics that capture attention and tell your brand story",
                "Professional photos, videos, and graphics that capture attention. We create content that resonates with your audience and showcases your brand in the best light.",
                &[
                    "Professional photography",
                    "Video production & editing",
                    "Graphic design",
                    "Product showcases",
                    "Brand storytelling",
                ],
                "▶",
            ),
            service(
                "hosting",
                "Web Hosting",
                "Fast, reliable hosting with 99.9% uptime, daily backups, and 24/7 monitoring for your peace of mind",
                "Secure and scalable hosting solutions with 99.9% uptime guarantee. We handle all the technical aspects so you can focus on your business.",
                &[
                    "99.9% uptime guarantee",
                    "Daily backups",
                    "SSL certificates included",
                    "24/7 monitoring",
                    "Scalable infrastructure",
                ],
                "▤",
            ),
            service(
                "ads",
                "Paid Advertising",
                "Data-driven ad campaigns on Google, Facebook & Instagram that maximize your ROI with optimization",
                "Strategic paid advertising across Google, Facebook, and Instagram. We create, manage, and optimize campaigns to maximize your return on investment.",
                &[
                    "Google Ads management",
                    "Facebook & Instagram ads",
                    "Campaign optimization",
                    "Detailed analytics",
                    "A/B testing",
                ],
                "◢",
            ),
            service(
                "marketplaces",
                "Marketplace Listing",
                "Complete onboarding for Takealot, Makro & Leroy Merlin with product optimization and inventory management",
                "Complete onboarding for SA's biggest marketplaces. From account setup to product optimization, we ensure maximum visibility and sales.",
                &[
                    "Takealot onboarding",
                    "Makro marketplace setup",
                    "Leroy Merlin integration",
                    "Product optimization",
                    "Inventory management",
                ],
                "▣",
            ),
        ])
    }

    pub fn get(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Cards for the navigator, in catalog order.
    pub fn cards(&self) -> Vec<Card> {
        self.services.iter().map(Service::to_card).collect()
    }
}

fn service(
    id: &str,
    title: &str,
    description: &str,
    full_description: &str,
    features: &[&str],
    icon: &str,
) -> Service {
    Service {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        full_description: full_description.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
        icon: Some(icon.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = ServiceCatalog::builtin();
        assert_eq!(catalog.len(), 6);
        let ids: Vec<String> = catalog.cards().into_iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec!["websites", "social", "content", "hosting", "ads", "marketplaces"]
        );
        assert!(catalog.get("hosting").unwrap().features.contains(&"Daily backups".to_string()));
    }

    #[test]
    fn test_ids_are_unique() {
        let catalog = ServiceCatalog::builtin();
        let mut ids: Vec<String> = catalog.cards().into_iter().map(|c| c.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_to_card_carries_icon() {
        let catalog = ServiceCatalog::builtin();
        let card = catalog.get("ads").unwrap().to_card();
        assert_eq!(card.title, "Paid Advertising");
        assert!(card.icon.is_some());
        assert!(card.color.is_none());
    }

    #[test]
    fn test_unknown_service() {
        assert!(ServiceCatalog::builtin().get("seo").is_none());
        assert!(ServiceCatalog::default().is_empty());
    }
}
