use serde::{Deserialize, Serialize};

use crate::model::about::{AboutContent, Certificate};
use crate::model::contact::ContactContent;
use crate::model::faq::{self, FAQItem};
use crate::model::hero::Hero;
use crate::model::lead::Lead;
use crate::model::post::Post;
use crate::model::product::Product;
use crate::model::rating::AverageRatingData;
use crate::model::service::Service;
use crate::model::social::SocialLinks;
use crate::model::testimonial::Testimonial;

/// Current shape of the persisted document. Snapshots written before the
/// field existed are treated as version 0 and migrated on load.
pub const SCHEMA_VERSION: u32 = 1;

/// The single aggregate holding every piece of editable site content. One
/// instance exists per running server; all reads and writes flow through the
/// content store, which hands out snapshots rather than references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    #[serde(default)]
    pub schema_version: u32,
    pub hero: Hero,
    pub about: AboutContent,
    pub contact: ContactContent,
    pub social: SocialLinks,
    pub services: Vec<Service>,
    pub products: Vec<Product>,
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub leads: Vec<Lead>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<AverageRatingData>,
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub faqs: Vec<FAQItem>,
}

impl ContentDocument {
    /// Permalink resolution. Duplicate slugs are not rejected on write, so
    /// the first match in list order wins.
    pub fn find_post_by_slug(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// FAQ listing grouped by category for the FAQ page.
    pub fn grouped_faqs(&self, default_category: &str) -> Vec<(String, Vec<FAQItem>)> {
        faq::group_by_category(&self.faqs, default_category)
    }

    /// Distinct product categories in first-appearance order, feeding the
    /// catalog filter chips.
    pub fn product_categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        categories
    }
}

fn seed_service(
    id: &str,
    key: &str,
    icon: &str,
    color: &str,
    hover_color: &str,
    image: Option<&str>,
) -> Service {
    Service {
        id: id.to_string(),
        title_key: format!("services.{key}.title"),
        desc_key: format!("services.{key}.desc"),
        detailed_desc_key: format!("services.{key}.detailedDesc"),
        icon: icon.to_string(),
        color: color.to_string(),
        hover_color: hover_color.to_string(),
        price: Some(format!("services.{key}.price")),
        image: image.map(str::to_string),
    }
}

impl Default for ContentDocument {
    fn default() -> Self {
        ContentDocument {
            schema_version: SCHEMA_VERSION,
            hero: Hero {
                title: "שירותי מיזוג אוויר מקצועיים".to_string(),
                subtitle: "התקנה, תיקון ותחזוקה של מזגנים בכפר סבא ובאזור המרכז והשרון"
                    .to_string(),
                description:
                    "מעל 10 שנות ניסיון בתחום המיזוג. שירות מקצועי, אמין ומהיר עם אלפי לקוחות מרוצים."
                        .to_string(),
                background_image:
                    "https://images.pexels.com/photos/159358/air-conditioner-air-conditioning-cool-159358.jpeg"
                        .to_string(),
            },
            about: AboutContent {
                title: "אודות ירון פרסי".to_string(),
                subtitle: "מעל עשור של מקצועיות ואמינות".to_string(),
                establishment_and_experience:
                    "ירון פרסי מתמחה בשירותי מיזוג אוויר מעל 10 שנים, עם דגש על איכות, מקצועיות ושירות אישי. אנו מספקים פתרונות מותאמים אישית לכל לקוח, החל מבתים פרטיים ועד עסקים גדולים באזור המרכז והשרון."
                        .to_string(),
                approach: Some(
                    "הגישה השירותית שלנו מתמקדת בהבנת צרכי הלקוח לעומק, מתן פתרונות יעילים וחסכוניים, ועבודה נקייה ומסודרת. אנו מאמינים בשקיפות מלאה מול הלקוח לאורך כל התהליך."
                        .to_string(),
                ),
                vision: Some(
                    "להיות חברת מיזוג האוויר המובילה באזור המרכז והשרון, המוכרת בזכות מקצועיות ללא פשרות, שירות לקוחות יוצא דופן, וחדשנות טכנולוגית מתמדת."
                        .to_string(),
                ),
                team_image: Some(
                    "https://via.placeholder.com/600x400.png?text=Team+Photo+Placeholder".to_string(),
                ),
                certificates: vec![
                    Certificate {
                        id: "cert1".to_string(),
                        name: "תעודת טכנאי מיזוג אוויר מוסמך".to_string(),
                        image_url: Some(
                            "https://via.placeholder.com/300x200.png?text=Certificate+1".to_string(),
                        ),
                        link: Some("#".to_string()),
                    },
                    Certificate {
                        id: "cert2".to_string(),
                        name: "רישיון עסק בתוקף".to_string(),
                        image_url: Some(
                            "https://via.placeholder.com/300x200.png?text=License".to_string(),
                        ),
                        link: Some("#".to_string()),
                    },
                ],
                experience: "10+".to_string(),
                customers: "5000+".to_string(),
                projects: "8000+".to_string(),
                warranty: "12".to_string(),
            },
            contact: ContactContent {
                phone: "054-9740791".to_string(),
                email: "yaron7533@gmail.com".to_string(),
                address: "כפר סבא ואזור המרכז והשרון".to_string(),
                hours: "ראשון - חמישי: 08:00 - 20:00".to_string(),
                map_embed_url: Some(
                    "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3380.0000000000005!2d34.900000000000006!3d32.183333000000004!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x0%3A0x0!2zMzLCsDEwJzYwLjAiTiAzNMKwMDAnMDAuMCJF!5e0!3m2!1sen!2sil!4v1678886400000!5m2!1sen!2sil"
                        .to_string(),
                ),
            },
            social: SocialLinks {
                whatsapp: "https://wa.me/972549740791".to_string(),
                facebook: "https://facebook.com/yaronparsi".to_string(),
                instagram: "https://instagram.com/yaronparsi".to_string(),
                email: "mailto:yaron7533@gmail.com".to_string(),
            },
            services: vec![
                seed_service(
                    "1",
                    "installation",
                    "Home",
                    "from-sky-500 to-blue-600",
                    "hover:from-sky-600 hover:to-blue-700",
                    Some("https://via.placeholder.com/400x250.png?text=Service+Installation"),
                ),
                seed_service(
                    "2",
                    "repair",
                    "Wrench",
                    "from-emerald-500 to-teal-600",
                    "hover:from-emerald-600 hover:to-teal-700",
                    Some("https://via.placeholder.com/400x250.png?text=Service+Repair"),
                ),
                seed_service(
                    "3",
                    "maintenance",
                    "Settings",
                    "from-purple-500 to-indigo-600",
                    "hover:from-purple-600 hover:to-indigo-700",
                    None,
                ),
                seed_service(
                    "4",
                    "consultation",
                    "MessageSquare",
                    "from-orange-500 to-red-600",
                    "hover:from-orange-600 hover:to-red-700",
                    None,
                ),
                seed_service(
                    "5",
                    "gas",
                    "Zap",
                    "from-yellow-500 to-orange-600",
                    "hover:from-yellow-600 hover:to-orange-700",
                    None,
                ),
                seed_service(
                    "6",
                    "emergency",
                    "Phone",
                    "from-red-500 to-pink-600",
                    "hover:from-red-600 hover:to-pink-700",
                    None,
                ),
            ],
            products: vec![Product {
                id: "1".to_string(),
                name: "מזגן אינוורטר 1 כ״ח".to_string(),
                category: "inverter".to_string(),
                price: "₪2,500".to_string(),
                image:
                    "https://images.pexels.com/photos/159358/air-conditioner-air-conditioning-cool-159358.jpeg"
                        .to_string(),
                features: vec![
                    "חיסכון בחשמל".to_string(),
                    "פעולה שקטה".to_string(),
                    "שלט רחוק".to_string(),
                    "מסנן אוויר".to_string(),
                ],
            }],
            testimonials: vec![
                Testimonial {
                    id: "1".to_string(),
                    name: "דוד כהן".to_string(),
                    location: "כפר סבא".to_string(),
                    rating: Some(5.0),
                    text:
                        "שירות מצוין! ירון הגיע במהירות, אבחן את הבעיה ותיקן את המזגן תוך שעה. מקצועי, אמין ובמחיר הוגן."
                            .to_string(),
                    avatar: Some(
                        "https://images.pexels.com/photos/1587009/pexels-photo-1587009.jpeg".to_string(),
                    ),
                    video_url: None,
                },
                Testimonial {
                    id: "2".to_string(),
                    name: "שרה לוי".to_string(),
                    location: "רעננה".to_string(),
                    rating: Some(4.0),
                    text: "התקינו לי מזגן חדש, עבודה נקייה ומחיר טוב. ממליצה בחום!".to_string(),
                    avatar: Some(
                        "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg".to_string(),
                    ),
                    video_url: Some("https://www.youtube.com/embed/dQw4w9WgXcQ".to_string()),
                },
                Testimonial {
                    id: "3".to_string(),
                    name: "משה כהן".to_string(),
                    location: "הרצליה".to_string(),
                    rating: None,
                    text: "שירות מהיר ואדיב.".to_string(),
                    avatar: Some(
                        "https://images.pexels.com/photos/91227/pexels-photo-91227.jpeg".to_string(),
                    ),
                    video_url: None,
                },
            ],
            leads: Vec::new(),
            average_rating: Some(AverageRatingData {
                value: 4.8,
                source: Some("Google Reviews".to_string()),
                review_count: Some(152),
            }),
            posts: vec![
                Post {
                    id: "1".to_string(),
                    slug: "first-blog-post".to_string(),
                    title: "המדריך המלא לבחירת מזגן לבית".to_string(),
                    author: "ירון פרסי".to_string(),
                    date: "2024-05-15T10:00:00Z".to_string(),
                    featured_image: Some(
                        "https://via.placeholder.com/800x400.png?text=Choosing+AC".to_string(),
                    ),
                    summary:
                        "כל מה שצריך לדעת לפני שבוחרים מזגן חדש - גודל, סוג, טכנולוגיה וטיפים לחיסכון בחשמל."
                            .to_string(),
                    content:
                        "<p>בחירת מזגן היא החלטה חשובה שיכולה להשפיע על הנוחות שלכם ועל חשבון החשמל לאורך שנים. במדריך זה נעבור על כל השיקולים המרכזיים...</p><h3>סוגי מזגנים</h3><p>קיימים מספר סוגי מזגנים עיקריים: מזגן עילי, מיני מרכזי, מרכזי, רצפתי ונייד. לכל אחד יתרונות וחסרונות...</p>"
                            .to_string(),
                    tags: vec![
                        "מיזוג אוויר".to_string(),
                        "מדריכים".to_string(),
                        "חיסכון בחשמל".to_string(),
                    ],
                },
                Post {
                    id: "2".to_string(),
                    slug: "common-ac-problems".to_string(),
                    title: "5 תקלות נפוצות במזגנים ואיך לזהות אותן".to_string(),
                    author: "צוות האתר".to_string(),
                    date: "2024-05-20T14:30:00Z".to_string(),
                    featured_image: Some(
                        "https://via.placeholder.com/800x400.png?text=AC+Problems".to_string(),
                    ),
                    summary:
                        "למדו לזהות תקלות נפוצות במזגן שלכם, מתי אפשר לטפל לבד ומתי חובה לקרוא לטכנאי."
                            .to_string(),
                    content:
                        "<p>מזגנים הם מכשירים מורכבים ולעיתים הם סובלים מתקלות. זיהוי מוקדם יכול לחסוך לכם כסף ואי נעימות...</p><ol><li>המזגן לא מקרר/מחמם</li><li>נזילת מים מהמזגן</li></ol>"
                            .to_string(),
                    tags: vec![
                        "תקלות נפוצות".to_string(),
                        "תיקון מזגנים".to_string(),
                        "תחזוקה".to_string(),
                    ],
                },
            ],
            faqs: vec![
                FAQItem {
                    id: "faq1".to_string(),
                    question: "כל כמה זמן מומלץ לבצע תחזוקה למזגן?".to_string(),
                    answer:
                        "מומלץ לבצע תחזוקה שוטפת למזגן לפחות פעם בשנה, כולל ניקוי פילטרים ובדיקת גז. תחזוקה נכונה מאריכה את חיי המזגן וחוסכת בחשמל."
                            .to_string(),
                    category: Some("תחזוקה".to_string()),
                },
                FAQItem {
                    id: "faq2".to_string(),
                    question: "המזגן לא מקרר, מה יכולה להיות הסיבה?".to_string(),
                    answer:
                        "סיבות נפוצות כוללות פילטרים סתומים, חוסר גז, בעיה בקבל או במדחס. יש לבדוק ראשית את הפילטרים, ובמידה והבעיה נמשכת לקרוא לטכנאי."
                            .to_string(),
                    category: Some("תקלות".to_string()),
                },
                FAQItem {
                    id: "faq3".to_string(),
                    question: "האם אתם מתקינים מזגנים בכל הארץ?".to_string(),
                    answer:
                        "אנו מתמקדים בעיקר באזור המרכז והשרון. ניתן ליצור קשר לבדיקת זמינות באזורים אחרים."
                            .to_string(),
                    category: Some("כללי".to_string()),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_lookup_returns_first_match() {
        let mut doc = ContentDocument::default();
        doc.posts[1].slug = doc.posts[0].slug.clone();
        let hit = doc.find_post_by_slug("first-blog-post").unwrap();
        assert_eq!(hit.id, "1");
        assert!(doc.find_post_by_slug("missing").is_none());
    }

    #[test]
    fn product_categories_are_distinct_in_order() {
        let mut doc = ContentDocument::default();
        let mut second = doc.products[0].clone();
        second.id = "2".to_string();
        second.category = "central".to_string();
        let mut third = doc.products[0].clone();
        third.id = "3".to_string();
        doc.products.push(second);
        doc.products.push(third);
        assert_eq!(doc.product_categories(), vec!["inverter", "central"]);
    }

    #[test]
    fn seed_document_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(ContentDocument::default()).unwrap();
        assert!(json.get("averageRating").is_some());
        assert!(json["hero"].get("backgroundImage").is_some());
        assert!(json["services"][0].get("titleKey").is_some());
        assert_eq!(json["schemaVersion"], SCHEMA_VERSION);
    }
}
