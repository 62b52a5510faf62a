use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FAQItem {
    #[serde(default)]
    pub id: String,
    pub question: String,
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Groups FAQs by category, preserving the order in which categories first
/// appear in the list. Items with no category (or an empty one) land in the
/// caller-supplied default group.
pub fn group_by_category(faqs: &[FAQItem], default_category: &str) -> Vec<(String, Vec<FAQItem>)> {
    let mut groups: Vec<(String, Vec<FAQItem>)> = Vec::new();
    for faq in faqs {
        let category = faq
            .category
            .clone()
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| default_category.to_string());
        match groups.iter_mut().find(|(name, _)| *name == category) {
            Some((_, items)) => items.push(faq.clone()),
            None => groups.push((category, vec![faq.clone()])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faq(id: &str, category: Option<&str>) -> FAQItem {
        FAQItem {
            id: id.to_string(),
            question: format!("q-{id}"),
            answer: format!("a-{id}"),
            category: category.map(str::to_string),
        }
    }

    #[test]
    fn groups_follow_first_appearance_order() {
        let faqs = vec![
            faq("1", Some("A")),
            faq("2", Some("A")),
            faq("3", Some("B")),
            faq("4", None),
        ];
        let groups = group_by_category(&faqs, "General");
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].0, "A");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "B");
        assert_eq!(groups[1].1.len(), 1);
        assert_eq!(groups[2].0, "General");
        assert_eq!(groups[2].1[0].id, "4");
    }

    #[test]
    fn empty_category_falls_into_default_group() {
        let faqs = vec![faq("1", Some(""))];
        let groups = group_by_category(&faqs, "General");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, "General");
    }
}
