use crate::types::hospital_detail::Offering;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OfferingDecision {
    /// Description does not mention the target product.
    Ignore,
    /// Target product listed but not open for booking.
    Listed { title: String, status_label: String },
    /// Target product listed and bookable.
    Bookable { title: String, status_label: String },
}

pub struct OfferingCheck {
    marker: String,
}

impl OfferingCheck {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    pub fn evaluate(&self, offering: &Offering) -> OfferingDecision {
        if !offering.text.contains(&self.marker) {
            return OfferingDecision::Ignore;
        }

        let title = offering.text.clone();
        let status_label = offering.btn_label.clone();

        if offering.enable {
            OfferingDecision::Bookable {
                title,
                status_label,
            }
        } else {
            OfferingDecision::Listed {
                title,
                status_label,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offering(text: &str, enable: bool, label: &str) -> Offering {
        Offering {
            text: text.into(),
            enable,
            btn_label: label.into(),
            ..Default::default()
        }
    }

    #[test]
    fn matching_and_enabled_is_bookable() {
        let check = OfferingCheck::new("九价");

        assert_eq!(
            check.evaluate(&offering("九价人乳头瘤病毒疫苗", true, "立即预约")),
            OfferingDecision::Bookable {
                title: "九价人乳头瘤病毒疫苗".into(),
                status_label: "立即预约".into(),
            }
        );
    }

    #[test]
    fn matching_but_disabled_is_only_listed() {
        let check = OfferingCheck::new("9-valent");

        assert_eq!(
            check.evaluate(&offering("HPV 9-valent vaccine", false, "Sold out")),
            OfferingDecision::Listed {
                title: "HPV 9-valent vaccine".into(),
                status_label: "Sold out".into(),
            }
        );
    }

    #[test]
    fn other_products_are_ignored_regardless_of_availability() {
        let check = OfferingCheck::new("九价");

        assert_eq!(
            check.evaluate(&offering("四价人乳头瘤病毒疫苗", true, "立即预约")),
            OfferingDecision::Ignore
        );
        assert_eq!(
            check.evaluate(&offering("二价", false, "暂未开始")),
            OfferingDecision::Ignore
        );
    }

    #[test]
    fn match_is_case_sensitive() {
        let check = OfferingCheck::new("HPV");

        assert_eq!(
            check.evaluate(&offering("hpv 9-valent", true, "Book now")),
            OfferingDecision::Ignore
        );
    }
}
