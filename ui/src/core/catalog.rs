//! Static reference data: the orderable services, the marketing offerings,
//! the portfolio and the AI design presets.

use crate::i18n::{pick, Language};

/// A string available in both site languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bilingual {
    pub en: &'static str,
    pub ar: &'static str,
}

impl Bilingual {
    pub const fn new(en: &'static str, ar: &'static str) -> Self {
        Self { en, ar }
    }

    pub fn get(&self, lang: Language) -> &'static str {
        pick(lang, self.en, self.ar)
    }
}

/// Orderable catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub id: &'static str,
    pub title: Bilingual,
    pub description: Bilingual,
    pub icon: &'static str,
    pub base_price: f64,
}

pub static SERVICES: [Service; 5] = [
    Service {
        id: "1",
        title: Bilingual::new("Business Cards", "كروت شخصية"),
        description: Bilingual::new("Premium paper, various sizes", "ورق فاخر، مقاسات متنوعة"),
        icon: "file-text",
        base_price: 20.0,
    },
    Service {
        id: "2",
        title: Bilingual::new("Banners", "بنرات إعلانية"),
        description: Bilingual::new("Outdoor durable vinyl", "فينيل متين للمساحات الخارجية"),
        icon: "printer",
        base_price: 45.0,
    },
    Service {
        id: "3",
        title: Bilingual::new("Logo Design", "تصميم شعار"),
        description: Bilingual::new("Creative branding identity", "هوية تجارية إبداعية"),
        icon: "pen-tool",
        base_price: 150.0,
    },
    Service {
        id: "4",
        title: Bilingual::new("Flyers", "فلايرز"),
        description: Bilingual::new("A4/A5, Glossy or Matte", "A4/A5، لامع أو مطفي"),
        icon: "file-text",
        base_price: 15.0,
    },
    Service {
        id: "5",
        title: Bilingual::new("Rollup Stands", "رول اب"),
        description: Bilingual::new("Easy to carry displays", "منصات عرض سهلة الحمل"),
        icon: "layout",
        base_price: 80.0,
    },
];

pub fn find_service(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|service| service.id == id)
}

/// Service title for an order row; unknown ids (catalog drift) get a generic label.
pub fn service_title(id: &str, lang: Language) -> &'static str {
    find_service(id)
        .map(|service| service.title.get(lang))
        .unwrap_or_else(|| pick(lang, "Custom Service", "خدمة مخصصة"))
}

/// Print sizes offered in the order form: stored value and label key.
pub static SIZES: [(&str, &str); 5] = [
    ("Standard", "size-standard"),
    ("A5", "size-a5"),
    ("A4", "size-a4"),
    ("A3", "size-a3"),
    ("Custom", "size-custom"),
];

/// Marketing card on the landing page (no price attached).
#[derive(Debug, Clone, PartialEq)]
pub struct Offering {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: Bilingual,
    pub description: Bilingual,
}

pub static OFFERINGS: [Offering; 6] = [
    Offering {
        id: "ads",
        icon: "monitor",
        title: Bilingual::new("Advertising Services", "خدمات الإعلان"),
        description: Bilingual::new(
            "Strategic campaigns that capture attention across all media platforms.",
            "حملات استراتيجية تجذب الانتباه عبر جميع المنصات الإعلامية.",
        ),
    },
    Offering {
        id: "design",
        icon: "pen-tool",
        title: Bilingual::new("Graphic Design", "تصميم جرافيك"),
        description: Bilingual::new(
            "Visual identities and creative designs that speak your brand’s language.",
            "هويات بصرية وتصاميم إبداعية تتحدث لغة علامتك التجارية.",
        ),
    },
    Offering {
        id: "printing_inout",
        icon: "printer",
        title: Bilingual::new("Indoor & Outdoor Printing", "طباعة داخلية وخارجية"),
        description: Bilingual::new(
            "High-quality banners, signs, and posters for every environment.",
            "لافتات ولوحات وبوسترات عالية الجودة لكل البيئات.",
        ),
    },
    Offering {
        id: "paper",
        icon: "file-text",
        title: Bilingual::new("Paper Document Printing", "طباعة المستندات الورقية"),
        description: Bilingual::new(
            "Corporate stationeries, brochures, flyers, and professional documents.",
            "قرطاسية الشركات والبروشورات والفلايرز والمستندات المهنية.",
        ),
    },
    Offering {
        id: "gifts",
        icon: "gift",
        title: Bilingual::new("Promotional Gifts", "طباعة الهدايا الدعائية"),
        description: Bilingual::new(
            "Customized merchandise including pens, mugs, and branded corporate gifts.",
            "هدايا مخصصة تشمل الأقلام والأكواب وهدايا الشركات ذات العلامة التجارية.",
        ),
    },
    Offering {
        id: "web",
        icon: "layout",
        title: Bilingual::new("Website Design", "تصميم المواقع"),
        description: Bilingual::new(
            "Fast, responsive, and modern websites tailored to your business needs.",
            "مواقع سريعة ومتجاوبة وعصرية مصممة خصيصاً لاحتياجات عملك.",
        ),
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub image: &'static str,
}

pub static PORTFOLIO: [Project; 6] = [
    Project { id: 1, title: "Luxury Branding", category: "Graphic Design", image: "/imgs/2.png" },
    Project { id: 2, title: "Retail Signage", category: "Outdoor Printing", image: "/imgs/1.png" },
    Project { id: 3, title: "Corporate Identity", category: "Full Package", image: "/imgs/4.png" },
    Project { id: 4, title: "Modern Website", category: "Web Design", image: "/imgs/5.png" },
    Project { id: 5, title: "Product Labels", category: "Printing", image: "/imgs/3.png" },
    Project { id: 6, title: "Exhibition Booth", category: "Indoor Display", image: "/imgs/6.png" },
];

/// What the AI preview should look like (logo, card, post).
#[derive(Debug, Clone, PartialEq)]
pub struct DesignType {
    pub id: &'static str,
    pub label: Bilingual,
}

pub static DESIGN_TYPES: [DesignType; 3] = [
    DesignType { id: "logo", label: Bilingual::new("Logo Design", "تصميم شعار") },
    DesignType {
        id: "business_card",
        label: Bilingual::new("Business Card Design", "تصميم كرت شخصي"),
    },
    DesignType {
        id: "social_media",
        label: Bilingual::new("Social Media Post Design", "تصميم منشور تواصل اجتماعي"),
    },
];

/// Visual style preset; `enhancement` is appended to the prompt verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignStyle {
    pub id: &'static str,
    pub label: Bilingual,
    pub enhancement: &'static str,
}

pub static DESIGN_STYLES: [DesignStyle; 6] = [
    DesignStyle {
        id: "minimal",
        label: Bilingual::new("Minimal", "بسيط"),
        enhancement: "in a clean minimal simple professional style",
    },
    DesignStyle {
        id: "luxury",
        label: Bilingual::new("Luxury", "فاخر"),
        enhancement: "in a luxury premium elegant style with gold accents",
    },
    DesignStyle {
        id: "modern",
        label: Bilingual::new("Modern", "عصري"),
        enhancement: "in a sleek modern high-tech contemporary style",
    },
    DesignStyle {
        id: "arabic",
        label: Bilingual::new("Arabic Calligraphy", "خط عربي"),
        enhancement: "with elegant Arabic calligraphy and cultural artistic elements",
    },
    DesignStyle {
        id: "corporate",
        label: Bilingual::new("Corporate", "مؤسسي"),
        enhancement: "in a professional corporate formal business style",
    },
    DesignStyle {
        id: "bold",
        label: Bilingual::new("Bold & Creative", "جريء وإبداعي"),
        enhancement: "in a bold creative vibrant artistic unique style",
    },
];

pub fn find_design_type(id: &str) -> Option<&'static DesignType> {
    DESIGN_TYPES.iter().find(|t| t.id == id)
}

pub fn find_design_style(id: &str) -> Option<&'static DesignStyle> {
    DESIGN_STYLES.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn service_ids_are_unique_and_prices_positive() {
        let ids: HashSet<_> = SERVICES.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SERVICES.len());
        assert!(SERVICES.iter().all(|s| s.base_price > 0.0));
    }

    #[test]
    fn titles_follow_language() {
        let cards = find_service("1").unwrap();
        assert_eq!(cards.title.get(Language::English), "Business Cards");
        assert_eq!(cards.title.get(Language::Arabic), "كروت شخصية");
        assert_eq!(service_title("99", Language::English), "Custom Service");
    }

    #[test]
    fn design_presets_resolve() {
        assert_eq!(find_design_type("logo").unwrap().label.en, "Logo Design");
        assert!(find_design_style("arabic").unwrap().enhancement.contains("calligraphy"));
        assert!(find_design_style("baroque").is_none());
    }
}
