//! Typed section payloads for the content CRUD surface.
//!
//! The HTTP layer addresses document sections by the camelCase names the
//! persisted JSON uses (`hero`, `services`, `averageRating`, ...). The sum
//! types here tag a request body with the section it targets so the store
//! only ever sees well-typed values: `SingletonUpdate` for wholesale
//! section replacement, `SectionItem` for list insertion, and
//! `SectionPatch` for shallow field merges over an existing list element.

use serde::Deserialize;
use serde_json::Value;

use crate::model::about::AboutContent;
use crate::model::contact::ContactContent;
use crate::model::faq::FAQItem;
use crate::model::hero::Hero;
use crate::model::post::Post;
use crate::model::product::Product;
use crate::model::rating::AverageRatingData;
use crate::model::service::Service;
use crate::model::social::SocialLinks;
use crate::model::testimonial::Testimonial;

/// List sections that accept inserts and patches. Leads are excluded: they
/// are created only through the lead intake path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSection {
    Services,
    Products,
    Testimonials,
    Posts,
    Faqs,
}

impl ListSection {
    pub fn parse(section: &str) -> Option<Self> {
        match section {
            "services" => Some(ListSection::Services),
            "products" => Some(ListSection::Products),
            "testimonials" => Some(ListSection::Testimonials),
            "posts" => Some(ListSection::Posts),
            "faqs" => Some(ListSection::Faqs),
            _ => None,
        }
    }
}

/// List sections that accept deletes; the dashboard may also discard leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletableSection {
    Services,
    Products,
    Testimonials,
    Leads,
    Posts,
    Faqs,
}

impl DeletableSection {
    pub fn parse(section: &str) -> Option<Self> {
        match section {
            "services" => Some(DeletableSection::Services),
            "products" => Some(DeletableSection::Products),
            "testimonials" => Some(DeletableSection::Testimonials),
            "leads" => Some(DeletableSection::Leads),
            "posts" => Some(DeletableSection::Posts),
            "faqs" => Some(DeletableSection::Faqs),
            _ => None,
        }
    }
}

/// Wholesale replacement payload for one of the singleton sections.
#[derive(Debug, Clone)]
pub enum SingletonUpdate {
    Hero(Hero),
    About(AboutContent),
    Contact(ContactContent),
    Social(SocialLinks),
    AverageRating(AverageRatingData),
}

impl SingletonUpdate {
    pub fn from_section(section: &str, value: Value) -> Result<Self, String> {
        let update = match section {
            "hero" => SingletonUpdate::Hero(decode(value)?),
            "about" => SingletonUpdate::About(decode(value)?),
            "contact" => SingletonUpdate::Contact(decode(value)?),
            "social" => SingletonUpdate::Social(decode(value)?),
            "averageRating" => SingletonUpdate::AverageRating(decode(value)?),
            other => return Err(format!("unknown singleton section: {other}")),
        };
        Ok(update)
    }
}

/// A full list element to insert. The store assigns the id, so payloads may
/// omit it.
#[derive(Debug, Clone)]
pub enum SectionItem {
    Service(Service),
    Product(Product),
    Testimonial(Testimonial),
    Post(Post),
    Faq(FAQItem),
}

impl SectionItem {
    pub fn from_section(section: ListSection, value: Value) -> Result<Self, String> {
        let item = match section {
            ListSection::Services => SectionItem::Service(decode(value)?),
            ListSection::Products => SectionItem::Product(decode(value)?),
            ListSection::Testimonials => SectionItem::Testimonial(decode(value)?),
            ListSection::Posts => SectionItem::Post(decode(value)?),
            ListSection::Faqs => SectionItem::Faq(decode(value)?),
        };
        Ok(item)
    }
}

/// A partial update for one list element, shallow-merged field by field.
#[derive(Debug, Clone)]
pub enum SectionPatch {
    Service(ServicePatch),
    Product(ProductPatch),
    Testimonial(TestimonialPatch),
    Post(PostPatch),
    Faq(FaqPatch),
}

impl SectionPatch {
    pub fn from_section(section: ListSection, value: Value) -> Result<Self, String> {
        let patch = match section {
            ListSection::Services => SectionPatch::Service(decode(value)?),
            ListSection::Products => SectionPatch::Product(decode(value)?),
            ListSection::Testimonials => SectionPatch::Testimonial(decode(value)?),
            ListSection::Posts => SectionPatch::Post(decode(value)?),
            ListSection::Faqs => SectionPatch::Faq(decode(value)?),
        };
        Ok(patch)
    }
}

fn decode<T: for<'de> Deserialize<'de>>(value: Value) -> Result<T, String> {
    serde_json::from_value(value).map_err(|e| e.to_string())
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServicePatch {
    pub title_key: Option<String>,
    pub desc_key: Option<String>,
    pub detailed_desc_key: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub hover_color: Option<String>,
    pub price: Option<String>,
    pub image: Option<String>,
}

impl ServicePatch {
    pub fn apply(self, service: &mut Service) {
        if let Some(v) = self.title_key {
            service.title_key = v;
        }
        if let Some(v) = self.desc_key {
            service.desc_key = v;
        }
        if let Some(v) = self.detailed_desc_key {
            service.detailed_desc_key = v;
        }
        if let Some(v) = self.icon {
            service.icon = v;
        }
        if let Some(v) = self.color {
            service.color = v;
        }
        if let Some(v) = self.hover_color {
            service.hover_color = v;
        }
        if let Some(v) = self.price {
            service.price = Some(v);
        }
        if let Some(v) = self.image {
            service.image = Some(v);
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<String>,
    pub image: Option<String>,
    pub features: Option<Vec<String>>,
}

impl ProductPatch {
    pub fn apply(self, product: &mut Product) {
        if let Some(v) = self.name {
            product.name = v;
        }
        if let Some(v) = self.category {
            product.category = v;
        }
        if let Some(v) = self.price {
            product.price = v;
        }
        if let Some(v) = self.image {
            product.image = v;
        }
        if let Some(v) = self.features {
            product.features = v;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestimonialPatch {
    pub name: Option<String>,
    pub location: Option<String>,
    pub rating: Option<f32>,
    pub text: Option<String>,
    pub avatar: Option<String>,
    pub video_url: Option<String>,
}

impl TestimonialPatch {
    pub fn apply(self, testimonial: &mut Testimonial) {
        if let Some(v) = self.name {
            testimonial.name = v;
        }
        if let Some(v) = self.location {
            testimonial.location = v;
        }
        if let Some(v) = self.rating {
            testimonial.rating = Some(v);
        }
        if let Some(v) = self.text {
            testimonial.text = v;
        }
        if let Some(v) = self.avatar {
            testimonial.avatar = Some(v);
        }
        if let Some(v) = self.video_url {
            testimonial.video_url = Some(v);
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostPatch {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
    pub featured_image: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl PostPatch {
    pub fn apply(self, post: &mut Post) {
        if let Some(v) = self.slug {
            post.slug = v;
        }
        if let Some(v) = self.title {
            post.title = v;
        }
        if let Some(v) = self.author {
            post.author = v;
        }
        if let Some(v) = self.date {
            post.date = v;
        }
        if let Some(v) = self.featured_image {
            post.featured_image = Some(v);
        }
        if let Some(v) = self.summary {
            post.summary = v;
        }
        if let Some(v) = self.content {
            post.content = v;
        }
        if let Some(v) = self.tags {
            post.tags = v;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FaqPatch {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<String>,
}

impl FaqPatch {
    pub fn apply(self, faq: &mut FAQItem) {
        if let Some(v) = self.question {
            faq.question = v;
        }
        if let Some(v) = self.answer {
            faq.answer = v;
        }
        if let Some(v) = self.category {
            faq.category = Some(v);
        }
    }
}
