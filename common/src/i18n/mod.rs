//! Static two-locale dictionary with fallback-to-key lookup.
//!
//! Missing keys resolve to the key string itself so untranslated text is
//! visible on the page instead of rendering blank.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "he")]
    He,
    #[serde(rename = "en")]
    En,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::He => "he",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "he" => Some(Language::He),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// Text direction the page must use under this locale.
    pub fn dir(self) -> &'static str {
        match self {
            Language::He => "rtl",
            Language::En => "ltr",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::He => Language::En,
            Language::En => Language::He,
        }
    }
}

/// The full dictionary for one locale.
pub fn table(lang: Language) -> &'static HashMap<&'static str, &'static str> {
    match lang {
        Language::He => &HE,
        Language::En => &EN,
    }
}

/// Resolves `key` under `lang`, falling back to the key itself.
pub fn translate<'a>(lang: Language, key: &'a str) -> &'a str {
    table(lang).get(key).copied().unwrap_or(key)
}

/// Resolves `key` under `lang`, preferring the caller's fallback over the
/// verbatim key when the entry is missing.
pub fn translate_or<'a>(lang: Language, key: &str, fallback: &'a str) -> &'a str {
    table(lang).get(key).copied().unwrap_or(fallback)
}

static HE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Header
        ("nav.home", "בית"),
        ("nav.services", "שירותים"),
        ("nav.about", "אודות"),
        ("nav.products", "מוצרים"),
        ("nav.testimonials", "המלצות"),
        ("nav.contact", "צור קשר"),
        ("nav.blog", "בלוג"),
        ("nav.faq", "שאלות נפוצות"),
        ("button.contact", "צור קשר"),
        // Hero
        ("hero.title", "שירותי מיזוג אוויר מקצועיים"),
        (
            "hero.subtitle",
            "התקנה, תיקון ותחזוקה של מזגנים בכפר סבא ובאזור המרכז והשרון",
        ),
        (
            "hero.description",
            "מעל 10 שנות ניסיון בתחום המיזוג. שירות מקצועי, אמין ומהיר עם אלפי לקוחות מרוצים.",
        ),
        ("hero.cta", "קבל הצעת מחיר"),
        ("hero.phone", "התקשר עכשיו"),
        // Services
        ("services.title", "השירותים שלנו"),
        ("services.subtitle", "פתרונות מקצועיים לכל צרכי המיזוג שלכם"),
        ("services.installation.title", "התקנת מזגנים"),
        (
            "services.installation.desc",
            "התקנה מקצועית של מזגנים לבתים ועסקים עם אחריות מלאה",
        ),
        (
            "services.installation.detailedDesc",
            "התקנת מזגנים עיליים, מיני מרכזיים ומרכזיים בבתים פרטיים ובעסקים, כולל פירוק מזגן ישן, התאמת מיקום ואחריות מלאה על העבודה.",
        ),
        ("services.installation.price", "החל מ-₪450"),
        ("services.repair.title", "תיקון מזגנים"),
        (
            "services.repair.desc",
            "אבחון מהיר ותיקון יעיל של תקלות במזגנים מכל הסוגים",
        ),
        (
            "services.repair.detailedDesc",
            "אבחון תקלות וטיפול בכל סוגי המזגנים: אי קירור, נזילות, רעשים ותקלות חשמל, עם חלקי חילוף מקוריים.",
        ),
        ("services.repair.price", "החל מ-₪250"),
        ("services.maintenance.title", "תחזוקה תקופתית"),
        (
            "services.maintenance.desc",
            "שירותי תחזוקה מקצועיים להארכת חיי המזגן ושמירה על יעילותו",
        ),
        (
            "services.maintenance.detailedDesc",
            "ניקוי פילטרים, חיטוי מאיידים ובדיקת גז תקופתית לשמירה על אוויר נקי וחיסכון בחשמל.",
        ),
        ("services.maintenance.price", "החל מ-₪200"),
        ("services.consultation.title", "ייעוץ מקצועי"),
        (
            "services.consultation.desc",
            "ייעוץ מקצועי לבחירת המזגן המתאים לצרכים שלכם",
        ),
        (
            "services.consultation.detailedDesc",
            "התאמת פתרון מיזוג לגודל החלל, לתקציב ולצריכת החשמל, כולל השוואת דגמים ויצרנים.",
        ),
        ("services.consultation.price", "ללא עלות"),
        ("services.gas.title", "מילוי גז"),
        (
            "services.gas.desc",
            "מילוי וטיפול בגז קירור עם בדיקות איכות מקצועיות",
        ),
        (
            "services.gas.detailedDesc",
            "בדיקת לחצים, איתור דליפות ומילוי גז קירור מכל הסוגים בהתאם לתקן היצרן.",
        ),
        ("services.gas.price", "החל מ-₪300"),
        ("services.emergency.title", "שירות חירום"),
        (
            "services.emergency.desc",
            "זמינות 24/6 לתיקונים דחופים בימות החום הקשים",
        ),
        (
            "services.emergency.detailedDesc",
            "מענה מהיר לתקלות דחופות בימי שיא: הגעה תוך שעה באזורי השירות המרכזיים.",
        ),
        ("services.emergency.price", "לפי קריאה"),
        // About
        ("about.title", "אודות ירון פרסי"),
        ("about.subtitle", "מעל עשור של מקצועיות ואמינות"),
        ("about.experience", "שנות ניסיון"),
        ("about.customers", "לקוחות מרוצים"),
        ("about.projects", "פרויקטים הושלמו"),
        ("about.warranty", "חודשי אחריות"),
        (
            "about.description",
            "ירון פרסי מתמחה בשירותי מיזוג אוויר מעל 10 שנים, עם דגש על איכות, מקצועיות ושירות אישי. אנו מספקים פתרונות מותאמים אישית לכל לקוח, החל מבתים פרטיים ועד עסקים גדולים באזור המרכז והשרון.",
        ),
        // Products
        ("products.title", "המוצרים שלנו"),
        ("products.subtitle", "מבחר רחב של מזגנים איכותיים ויעילים"),
        ("products.filter.all", "הכל"),
        ("products.filter.inverter", "אינוורטר"),
        ("products.filter.central", "מרכזי"),
        ("products.filter.portable", "נייד"),
        ("products.filter.commercial", "מסחרי"),
        // Testimonials
        ("testimonials.title", "מה אומרים הלקוחות"),
        ("testimonials.subtitle", "המלצות מלקוחות מרוצים"),
        // Contact
        ("contact.title", "צור קשר"),
        ("contact.subtitle", "נשמח לעזור לכם עם כל צורך במיזוג אוויר"),
        ("contact.form.name", "שם מלא"),
        ("contact.form.phone", "טלפון"),
        ("contact.form.email", "אימייל"),
        ("contact.form.service", "סוג שירות"),
        ("contact.form.message", "הודעה"),
        ("contact.form.submit", "שלח הודעה"),
        ("contact.info.title", "פרטי יצירת קשר"),
        ("contact.info.phone", "טלפון"),
        ("contact.info.email", "אימייל"),
        ("contact.info.location", "מיקום"),
        ("contact.info.hours", "שעות פעילות"),
        ("contact.info.hours.value", "ראשון - חמישי: 08:00 - 20:00"),
        // Blog and FAQ
        ("blog.title", "הבלוג שלנו"),
        ("blog.subtitle", "מדריכים, טיפים וחדשות מעולם המיזוג"),
        ("blog.notFound", "הפוסט המבוקש לא נמצא"),
        ("faq.title", "שאלות נפוצות"),
        ("faq.subtitle", "תשובות לשאלות שאנחנו נשאלים הכי הרבה"),
        ("faq.defaultCategory", "כללי"),
        // Service request form
        ("serviceRequest.title", "קריאת שירות חדשה"),
        ("serviceRequest.serviceTypeLabel", "סוג השירות הנדרש"),
        ("serviceRequest.serviceType.installation", "התקנה"),
        ("serviceRequest.serviceType.repair", "תיקון"),
        ("serviceRequest.serviceType.maintenance", "תחזוקה"),
        ("serviceRequest.serviceType.consultation", "ייעוץ"),
        ("serviceRequest.serviceType.other", "אחר"),
        // Footer
        ("footer.services.title", "שירותים"),
        ("footer.contact.title", "יצירת קשר"),
        ("footer.hours.title", "שעות פעילות"),
        ("footer.rights", "כל הזכויות שמורות"),
    ])
});

static EN: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Header
        ("nav.home", "Home"),
        ("nav.services", "Services"),
        ("nav.about", "About"),
        ("nav.products", "Products"),
        ("nav.testimonials", "Testimonials"),
        ("nav.contact", "Contact"),
        ("nav.blog", "Blog"),
        ("nav.faq", "FAQ"),
        ("button.contact", "Contact Us"),
        // Hero
        ("hero.title", "Professional Air Conditioning Services"),
        (
            "hero.subtitle",
            "Installation, Repair & Maintenance of AC Units in Kfar Saba and Central Sharon Region",
        ),
        (
            "hero.description",
            "Over 10 years of experience in air conditioning. Professional, reliable and fast service with thousands of satisfied customers.",
        ),
        ("hero.cta", "Get Quote"),
        ("hero.phone", "Call Now"),
        // Services
        ("services.title", "Our Services"),
        (
            "services.subtitle",
            "Professional solutions for all your air conditioning needs",
        ),
        ("services.installation.title", "AC Installation"),
        (
            "services.installation.desc",
            "Professional installation of air conditioners for homes and businesses with full warranty",
        ),
        (
            "services.installation.detailedDesc",
            "Installation of wall, mini-central and central units for homes and businesses, including removal of the old unit, placement planning and a full workmanship warranty.",
        ),
        ("services.installation.price", "From ₪450"),
        ("services.repair.title", "AC Repair"),
        (
            "services.repair.desc",
            "Quick diagnosis and efficient repair of faults in all types of air conditioners",
        ),
        (
            "services.repair.detailedDesc",
            "Fault diagnosis and repair for every unit type: poor cooling, leaks, noise and electrical faults, using original spare parts.",
        ),
        ("services.repair.price", "From ₪250"),
        ("services.maintenance.title", "Periodic Maintenance"),
        (
            "services.maintenance.desc",
            "Professional maintenance services to extend AC life and maintain efficiency",
        ),
        (
            "services.maintenance.detailedDesc",
            "Filter cleaning, evaporator disinfection and periodic gas checks that keep the air clean and the power bill down.",
        ),
        ("services.maintenance.price", "From ₪200"),
        ("services.consultation.title", "Professional Consultation"),
        (
            "services.consultation.desc",
            "Professional advice for choosing the right air conditioner for your needs",
        ),
        (
            "services.consultation.detailedDesc",
            "Matching the cooling solution to the space, the budget and the power consumption, including model and brand comparisons.",
        ),
        ("services.consultation.price", "Free of charge"),
        ("services.gas.title", "Gas Refill"),
        (
            "services.gas.desc",
            "Refrigerant filling and treatment with professional quality checks",
        ),
        (
            "services.gas.detailedDesc",
            "Pressure testing, leak detection and refrigerant refills of all types per the manufacturer's spec.",
        ),
        ("services.gas.price", "From ₪300"),
        ("services.emergency.title", "Emergency Service"),
        (
            "services.emergency.desc",
            "24/6 availability for urgent repairs during hot summer days",
        ),
        (
            "services.emergency.detailedDesc",
            "Rapid response for urgent failures in peak season: arrival within the hour across the core service areas.",
        ),
        ("services.emergency.price", "Per call"),
        // About
        ("about.title", "About Yaron Parsi"),
        ("about.subtitle", "Over a decade of professionalism and reliability"),
        ("about.experience", "Years Experience"),
        ("about.customers", "Happy Customers"),
        ("about.projects", "Completed Projects"),
        ("about.warranty", "Months Warranty"),
        (
            "about.description",
            "Yaron Parsi specializes in air conditioning services for over 10 years, focusing on quality, professionalism and personal service. We provide customized solutions for every client, from private homes to large businesses in the central and Sharon regions.",
        ),
        // Products
        ("products.title", "Our Products"),
        (
            "products.subtitle",
            "Wide selection of quality and efficient air conditioners",
        ),
        ("products.filter.all", "All"),
        ("products.filter.inverter", "Inverter"),
        ("products.filter.central", "Central"),
        ("products.filter.portable", "Portable"),
        ("products.filter.commercial", "Commercial"),
        // Testimonials
        ("testimonials.title", "What Customers Say"),
        ("testimonials.subtitle", "Testimonials from satisfied customers"),
        // Contact
        ("contact.title", "Contact Us"),
        (
            "contact.subtitle",
            "We'd be happy to help you with any air conditioning need",
        ),
        ("contact.form.name", "Full Name"),
        ("contact.form.phone", "Phone"),
        ("contact.form.email", "Email"),
        ("contact.form.service", "Service Type"),
        ("contact.form.message", "Message"),
        ("contact.form.submit", "Send Message"),
        ("contact.info.title", "Contact Information"),
        ("contact.info.phone", "Phone"),
        ("contact.info.email", "Email"),
        ("contact.info.location", "Location"),
        ("contact.info.hours", "Business Hours"),
        ("contact.info.hours.value", "Sunday - Thursday: 08:00 - 20:00"),
        // Blog and FAQ
        ("blog.title", "Our Blog"),
        ("blog.subtitle", "Guides, tips and news from the cooling world"),
        ("blog.notFound", "The requested post was not found"),
        ("faq.title", "Frequently Asked Questions"),
        ("faq.subtitle", "Answers to the questions we hear the most"),
        ("faq.defaultCategory", "General"),
        // Service request form
        ("serviceRequest.title", "New Service Request"),
        ("serviceRequest.serviceTypeLabel", "Requested Service Type"),
        ("serviceRequest.serviceType.installation", "Installation"),
        ("serviceRequest.serviceType.repair", "Repair"),
        ("serviceRequest.serviceType.maintenance", "Maintenance"),
        ("serviceRequest.serviceType.consultation", "Consultation"),
        ("serviceRequest.serviceType.other", "Other"),
        // Footer
        ("footer.services.title", "Services"),
        ("footer.contact.title", "Contact"),
        ("footer.hours.title", "Business Hours"),
        ("footer.rights", "All rights reserved"),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_differ_between_locales() {
        assert_eq!(translate(Language::He, "nav.home"), "בית");
        assert_eq!(translate(Language::En, "nav.home"), "Home");
        assert_ne!(
            translate(Language::He, "hero.title"),
            translate(Language::En, "hero.title")
        );
    }

    #[test]
    fn missing_key_falls_back_to_the_key_itself() {
        assert_eq!(
            translate(Language::He, "nonexistent.key"),
            "nonexistent.key"
        );
    }

    #[test]
    fn caller_fallback_wins_over_key_echo() {
        assert_eq!(
            translate_or(Language::En, "nonexistent.key", "fallback"),
            "fallback"
        );
        assert_eq!(translate_or(Language::He, "nav.home", "fallback"), "בית");
    }

    #[test]
    fn toggle_flips_locale_and_direction() {
        assert_eq!(Language::He.toggled(), Language::En);
        assert_eq!(Language::He.dir(), "rtl");
        assert_eq!(Language::En.dir(), "ltr");
    }

    #[test]
    fn locale_codes_round_trip() {
        assert_eq!(Language::from_code("he"), Some(Language::He));
        assert_eq!(Language::from_code("en"), Some(Language::En));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::En.code(), "en");
    }
}
