use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use common::model::about::AboutContent;
use common::model::content::ContentDocument;
use common::model::lead::{Lead, NewLead};
use common::model::patch::{DeletableSection, SectionItem, SectionPatch, SingletonUpdate};
use log::error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::content::restore;
use crate::content::slots::{self, SlotStore};

/// A thread-safe handle to the single content document, shared across the
/// Actix application as `web::Data`.
///
/// Mutations update the in-memory document synchronously (reads issued
/// afterwards always observe them) and then write the whole serialized
/// document into its durable slot. A failed slot write is logged and
/// otherwise ignored: the in-memory document stays authoritative and there
/// is no user-facing channel for storage errors.
#[derive(Clone)]
pub struct ContentState {
    document: Arc<RwLock<ContentDocument>>,
    slots: SlotStore,
}

impl ContentState {
    /// Restores the last persisted snapshot over the seed defaults, or
    /// starts from the defaults when nothing usable is stored.
    pub fn load(slots: SlotStore) -> Self {
        let saved = match slots.read(slots::WEBSITE_CONTENT) {
            Ok(saved) => saved,
            Err(e) => {
                error!("failed to read content slot: {e}");
                None
            }
        };
        ContentState {
            document: Arc::new(RwLock::new(restore::restore(saved))),
            slots,
        }
    }

    /// Full copy of the current document. Consumers never get a live
    /// reference into the store.
    pub async fn snapshot(&self) -> ContentDocument {
        self.document.read().await.clone()
    }

    /// Replaces one singleton section wholesale. Certificates submitted
    /// without an id are assigned one on every about write, not just the
    /// first.
    pub async fn update_singleton(&self, update: SingletonUpdate) {
        let snapshot = {
            let mut doc = self.document.write().await;
            match update {
                SingletonUpdate::Hero(hero) => doc.hero = hero,
                SingletonUpdate::About(mut about) => {
                    assign_certificate_ids(&mut about);
                    doc.about = about;
                }
                SingletonUpdate::Contact(contact) => doc.contact = contact,
                SingletonUpdate::Social(social) => doc.social = social,
                SingletonUpdate::AverageRating(rating) => doc.average_rating = Some(rating),
            }
            doc.clone()
        };
        self.persist(&snapshot);
    }

    /// Appends a list item under a freshly assigned id and returns that id.
    pub async fn add_item(&self, item: SectionItem) -> String {
        let id = next_id();
        let snapshot = {
            let mut doc = self.document.write().await;
            match item {
                SectionItem::Service(mut service) => {
                    service.id = id.clone();
                    doc.services.push(service);
                }
                SectionItem::Product(mut product) => {
                    product.id = id.clone();
                    doc.products.push(product);
                }
                SectionItem::Testimonial(mut testimonial) => {
                    testimonial.id = id.clone();
                    doc.testimonials.push(testimonial);
                }
                SectionItem::Post(mut post) => {
                    post.id = id.clone();
                    doc.posts.push(post);
                }
                SectionItem::Faq(mut faq) => {
                    faq.id = id.clone();
                    doc.faqs.push(faq);
                }
            }
            doc.clone()
        };
        self.persist(&snapshot);
        id
    }

    /// Shallow-merges a patch over the list element with the given id.
    /// An unknown id leaves the list untouched and reports `false`; ids are
    /// never changed by a patch.
    pub async fn update_item(&self, id: &str, patch: SectionPatch) -> bool {
        let (snapshot, found) = {
            let mut doc = self.document.write().await;
            let found = match patch {
                SectionPatch::Service(p) => {
                    patch_first(&mut doc.services, id, |s| &s.id, |s| p.apply(s))
                }
                SectionPatch::Product(p) => {
                    patch_first(&mut doc.products, id, |s| &s.id, |s| p.apply(s))
                }
                SectionPatch::Testimonial(p) => {
                    patch_first(&mut doc.testimonials, id, |s| &s.id, |s| p.apply(s))
                }
                SectionPatch::Post(p) => patch_first(&mut doc.posts, id, |s| &s.id, |s| p.apply(s)),
                SectionPatch::Faq(p) => patch_first(&mut doc.faqs, id, |s| &s.id, |s| p.apply(s)),
            };
            (doc.clone(), found)
        };
        if found {
            self.persist(&snapshot);
        }
        found
    }

    /// Removes the list element with the given id; an unknown id is a
    /// silent no-op.
    pub async fn delete_item(&self, section: DeletableSection, id: &str) -> bool {
        let (snapshot, found) = {
            let mut doc = self.document.write().await;
            let found = match section {
                DeletableSection::Services => remove_by_id(&mut doc.services, id, |s| &s.id),
                DeletableSection::Products => remove_by_id(&mut doc.products, id, |s| &s.id),
                DeletableSection::Testimonials => {
                    remove_by_id(&mut doc.testimonials, id, |s| &s.id)
                }
                DeletableSection::Leads => remove_by_id(&mut doc.leads, id, |s| &s.id),
                DeletableSection::Posts => remove_by_id(&mut doc.posts, id, |s| &s.id),
                DeletableSection::Faqs => remove_by_id(&mut doc.faqs, id, |s| &s.id),
            };
            (doc.clone(), found)
        };
        if found {
            self.persist(&snapshot);
        }
        found
    }

    /// Creates the lead record (id and timestamp are assigned here, never
    /// by callers) and prepends it so the newest lead is always first.
    pub async fn add_lead(&self, new_lead: NewLead) -> Lead {
        let lead = Lead {
            id: next_id(),
            name: new_lead.name,
            phone: new_lead.phone,
            email: new_lead.email,
            message: new_lead.message,
            source: new_lead.source,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            residential_area: new_lead.residential_area,
        };
        let snapshot = {
            let mut doc = self.document.write().await;
            doc.leads.insert(0, lead.clone());
            doc.clone()
        };
        self.persist(&snapshot);
        lead
    }

    fn persist(&self, doc: &ContentDocument) {
        match serde_json::to_string(doc) {
            Ok(json) => {
                if let Err(e) = self.slots.write(slots::WEBSITE_CONTENT, &json) {
                    error!("failed to persist content document: {e}");
                }
            }
            Err(e) => error!("failed to serialize content document: {e}"),
        }
    }
}

fn patch_first<T>(
    items: &mut [T],
    id: &str,
    get_id: impl Fn(&T) -> &str,
    apply: impl FnOnce(&mut T),
) -> bool {
    match items.iter_mut().find(|item| get_id(item) == id) {
        Some(item) => {
            apply(item);
            true
        }
        None => false,
    }
}

fn remove_by_id<T>(items: &mut Vec<T>, id: &str, get_id: impl Fn(&T) -> &str) -> bool {
    let before = items.len();
    items.retain(|item| get_id(item) != id);
    items.len() != before
}

static LAST_ID_MILLIS: AtomicI64 = AtomicI64::new(0);

/// Time-derived id, as a decimal millisecond string. Consecutive calls
/// within the same millisecond bump past the last issued value so ids stay
/// unique within a process.
fn next_id() -> String {
    let now = Utc::now().timestamp_millis();
    let mut prev = LAST_ID_MILLIS.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(prev + 1);
        match LAST_ID_MILLIS.compare_exchange_weak(
            prev,
            candidate,
            Ordering::Relaxed,
            Ordering::Relaxed,
        ) {
            Ok(_) => return candidate.to_string(),
            Err(actual) => prev = actual,
        }
    }
}

fn assign_certificate_ids(about: &mut AboutContent) {
    for certificate in &mut about.certificates {
        if certificate.id.is_empty() {
            let suffix: String = Uuid::new_v4().simple().to_string()[..9].to_string();
            certificate.id = format!("cert-{}-{}", Utc::now().timestamp_millis(), suffix);
        }
    }
}
