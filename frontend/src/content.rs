//! Hand-authored copy for the landing page. Everything here is fixed at
//! compile time and rendered as-is.

use crate::components::icons::IconKind;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Differentiator {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Partner {
    pub name: &'static str,
    pub logo: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub items: &'static [&'static str],
}

pub const BRAND: &str = "NCLOUD3";
pub const TAGLINE: &str = "Your Premier Cloud Solutions Partner in Mauritius";
pub const FOOTER_BLURB: &str = "Your trusted cloud partner in Mauritius";
pub const COPYRIGHT: &str = "© 2024 NCLOUD3. All rights reserved.";

pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1451187580459-43490279c0fa?auto=format&fit=crop&q=80";
pub const TEAM_IMAGE: &str =
    "https://images.unsplash.com/photo-1551434678-e076c223a692?auto=format&fit=crop&q=80";
pub const VISION_IMAGE: &str =
    "https://images.unsplash.com/photo-1560264280-88b68371db39?auto=format&fit=crop&q=80";

pub const MISSION: &str = "At NCloud3, our mission is to deliver exceptional, tailored cloud solutions, \
    empowering businesses with cost effective, secure, and scalable services. \
    We measure our success by our clients' achievements.";

pub const VISION: &str = "NCloud3 envisions being the foremost innovator and trusted cloud managed \
    service provider, driving digital transformation and fostering sustainable growth \
    for businesses worldwide.";

pub const SERVICES: &[Service] = &[
    Service {
        icon: IconKind::Cloud,
        title: "Cloud Migration",
        description: "Expert cloud migration services with zero downtime and seamless transition to cloud infrastructure",
        image: "https://images.unsplash.com/photo-1451187580459-43490279c0fa?auto=format&fit=crop&q=80",
    },
    Service {
        icon: IconKind::Code,
        title: "Automation & DevOps",
        description: "Streamline operations with cutting-edge automation and DevOps practices",
        image: "https://images.unsplash.com/photo-1618401471353-b98afee0b2eb?auto=format&fit=crop&q=80",
    },
    Service {
        icon: IconKind::Users,
        title: "Consulting",
        description: "Strategic guidance and expert consultation for your digital transformation journey",
        image: "https://images.unsplash.com/photo-1600880292203-757bb62b4baf?auto=format&fit=crop&q=80",
    },
    Service {
        icon: IconKind::Cpu,
        title: "AI & ML Services",
        description: "Advanced artificial intelligence and machine learning solutions including GenAI implementation",
        image: "https://images.unsplash.com/photo-1677442136019-21780ecad995?auto=format&fit=crop&q=80",
    },
    Service {
        icon: IconKind::Dollar,
        title: "Cloud Cost Optimization & FinOps",
        description: "Optimize cloud spending and implement FinOps practices for maximum ROI",
        image: "https://images.unsplash.com/photo-1554224155-8d04cb21cd6c?auto=format&fit=crop&q=80",
    },
];

pub const DIFFERENTIATORS: &[Differentiator] = &[
    Differentiator {
        title: "Customer-Centric Approach",
        description: "We understand our client's unique needs and tailor our offerings accordingly.",
    },
    Differentiator {
        title: "Tailored Solutions",
        description: "Precision-driven solutions customized to your unique business needs.",
    },
    Differentiator {
        title: "Certified Professionals",
        description: "Expertise you can trust—our certified professionals deliver industry-leading solutions.",
    },
    Differentiator {
        title: "Reliability 24/7",
        description: "Uninterrupted peace of mind with our round-the-clock support and monitoring.",
    },
];

pub const PARTNERS: &[Partner] = &[
    Partner {
        name: "AWS",
        logo: "https://upload.wikimedia.org/wikipedia/commons/9/93/Amazon_Web_Services_Logo.svg",
    },
    Partner {
        name: "Microsoft",
        logo: "https://upload.wikimedia.org/wikipedia/commons/9/96/Microsoft_logo_%282012%29.svg",
    },
];

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        heading: "Services",
        items: &[
            "Cloud Migration",
            "Automation & DevOps",
            "AI & ML Services",
            "Cloud Cost Optimization",
        ],
    },
    FooterColumn {
        heading: "Company",
        items: &["About Us", "Careers", "Blog", "Contact"],
    },
    FooterColumn {
        heading: "Contact",
        items: &["Port Louis, Mauritius", "nc3mu@ncloud3.com", "+230 XXX XXXX"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn services_are_listed_in_catalogue_order() {
        let titles: Vec<&str> = SERVICES.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec![
                "Cloud Migration",
                "Automation & DevOps",
                "Consulting",
                "AI & ML Services",
                "Cloud Cost Optimization & FinOps",
            ]
        );
    }

    #[test]
    fn every_service_has_an_image_and_copy() {
        for service in SERVICES {
            assert!(service.image.starts_with("https://"), "{}", service.title);
            assert!(!service.description.is_empty(), "{}", service.title);
        }
    }
}
