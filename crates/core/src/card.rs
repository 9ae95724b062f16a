use serde::Serialize;

use crate::restaurant::Restaurant;

/// Cuisine badges shown before collapsing the rest into "+N"
pub const VISIBLE_CUISINES: usize = 3;

pub const EMPTY_STATE_MESSAGE: &str = "No restaurants match your current filters.";
pub const EMPTY_STATE_HINT: &str = "Try adjusting your search.";

/// Display-ready summary of one restaurant
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantCard {
    pub id: String,
    pub name: String,
    pub logo_url: Option<String>,
    pub rating: Option<String>,
    pub address: String,
    pub cuisines: Vec<String>,
    pub more_cuisines: Option<String>,
    pub delivery_eta: Option<String>,
    pub delivery_cost: Option<String>,
}

/// "Free delivery" for a zero cost, otherwise the cost in pounds
pub fn delivery_cost_label(cost: f64) -> String {
    if cost == 0.0 {
        "Free delivery".to_string()
    } else {
        format!("£{cost:.2}")
    }
}

/// First line and postcode, skipping whichever part is blank
pub fn address_line(restaurant: &Restaurant) -> String {
    let parts: Vec<&str> = restaurant
        .address
        .iter()
        .flat_map(|address| [address.first_line.as_str(), address.postal_code.as_str()])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        "Address not available".to_string()
    } else {
        parts.join(", ")
    }
}

/// Rating line, only when at least one rating exists
pub fn rating_line(restaurant: &Restaurant) -> Option<String> {
    restaurant
        .rating
        .as_ref()
        .filter(|rating| rating.count > 0)
        .map(|rating| format!("{:.1} ({} ratings)", rating.star_rating, rating.count))
}

/// ETA window, only when both bounds are known
pub fn eta_line(restaurant: &Restaurant) -> Option<String> {
    let eta = restaurant.delivery_eta_minutes.as_ref()?;
    match (eta.range_lower, eta.range_upper) {
        (Some(lower), Some(upper)) => Some(format!("{lower}-{upper} min")),
        _ => None,
    }
}

/// Cuisine names, collapsed to the first few plus a "+N" badge unless `expanded`
pub fn cuisine_badges(restaurant: &Restaurant, expanded: bool) -> (Vec<String>, Option<String>) {
    let all: Vec<String> = restaurant
        .cuisines()
        .iter()
        .filter(|c| !c.name.is_empty())
        .map(|c| c.name.clone())
        .collect();

    if expanded || all.len() <= VISIBLE_CUISINES {
        return (all, None);
    }

    let hidden = all.len() - VISIBLE_CUISINES;
    let visible = all.into_iter().take(VISIBLE_CUISINES).collect();
    (visible, Some(format!("+{hidden}")))
}

/// Build the card for a restaurant
///
/// The delivery footer (ETA and cost) is only shown when both are known.
pub fn build_card(restaurant: &Restaurant, expand_cuisines: bool) -> RestaurantCard {
    let (cuisines, more_cuisines) = cuisine_badges(restaurant, expand_cuisines);

    let (delivery_eta, delivery_cost) = match (eta_line(restaurant), restaurant.delivery_cost) {
        (Some(eta), Some(cost)) => (Some(eta), Some(delivery_cost_label(cost))),
        _ => (None, None),
    };

    RestaurantCard {
        id: restaurant.id.clone(),
        name: restaurant.name.clone(),
        logo_url: restaurant.logo_url.clone(),
        rating: rating_line(restaurant),
        address: address_line(restaurant),
        cuisines,
        more_cuisines,
        delivery_eta,
        delivery_cost,
    }
}

/// "Showing X of Y results"
pub fn results_summary(shown: usize, total: usize) -> String {
    format!("Showing {shown} of {total} results")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::restaurant::{Address, DeliveryEta, Rating};

    #[test]
    fn test_delivery_cost_label() {
        assert_eq!(delivery_cost_label(0.0), "Free delivery");
        assert_eq!(delivery_cost_label(2.5), "£2.50");
        assert_eq!(delivery_cost_label(3.999), "£4.00");
    }

    #[test]
    fn test_address_line() {
        let mut r = fixtures::restaurant("1", "A");
        assert_eq!(address_line(&r), "Address not available");

        r.address = Some(Address {
            first_line: "1 High Street".to_string(),
            postal_code: "CT1 2EH".to_string(),
        });
        assert_eq!(address_line(&r), "1 High Street, CT1 2EH");

        r.address = Some(Address {
            first_line: "1 High Street".to_string(),
            ..Address::default()
        });
        assert_eq!(address_line(&r), "1 High Street");

        r.address = Some(Address::default());
        assert_eq!(address_line(&r), "Address not available");
    }

    #[test]
    fn test_rating_hidden_without_ratings() {
        let mut r = fixtures::restaurant("1", "A");
        r.rating = Some(Rating {
            count: 0,
            star_rating: 0.0,
        });
        assert!(rating_line(&r).is_none());

        r.rating = Some(Rating {
            count: 87,
            star_rating: 4.26,
        });
        assert_eq!(rating_line(&r).as_deref(), Some("4.3 (87 ratings)"));
    }

    #[test]
    fn test_cuisine_badges_collapse_after_three() {
        let r = fixtures::with_cuisines(
            fixtures::restaurant("1", "A"),
            &[
                ("a", "Pizza"),
                ("b", "Italian"),
                ("c", "Pasta"),
                ("d", "Desserts"),
                ("e", "Drinks"),
            ],
        );

        let (visible, more) = cuisine_badges(&r, false);
        assert_eq!(visible, vec!["Pizza", "Italian", "Pasta"]);
        assert_eq!(more.as_deref(), Some("+2"));

        let (visible, more) = cuisine_badges(&r, true);
        assert_eq!(visible.len(), 5);
        assert!(more.is_none());
    }

    #[test]
    fn test_cuisine_badges_three_or_fewer() {
        let r = fixtures::with_cuisines(
            fixtures::restaurant("1", "A"),
            &[("a", "Pizza"), ("b", "Italian"), ("c", "Pasta")],
        );
        let (visible, more) = cuisine_badges(&r, false);
        assert_eq!(visible.len(), 3);
        assert!(more.is_none());
    }

    #[test]
    fn test_cuisine_badges_skip_unnamed_cuisines() {
        let r = fixtures::with_cuisines(
            fixtures::restaurant("1", "A"),
            &[("pizza", "Pizza"), ("mystery", "")],
        );
        let (visible, more) = cuisine_badges(&r, false);
        assert_eq!(visible, vec!["Pizza"]);
        assert!(more.is_none());
    }

    #[test]
    fn test_card_delivery_footer_needs_eta_and_cost() {
        let mut r = fixtures::restaurant("1", "A");
        r.delivery_cost = Some(0.0);
        let card = build_card(&r, false);
        assert!(card.delivery_eta.is_none());
        assert!(card.delivery_cost.is_none());

        r.delivery_eta_minutes = Some(DeliveryEta {
            range_lower: Some(15),
            range_upper: None,
        });
        assert!(build_card(&r, false).delivery_eta.is_none());

        r.delivery_eta_minutes = Some(DeliveryEta {
            range_lower: Some(15),
            range_upper: Some(30),
        });
        let card = build_card(&r, false);
        assert_eq!(card.delivery_eta.as_deref(), Some("15-30 min"));
        assert_eq!(card.delivery_cost.as_deref(), Some("Free delivery"));
    }

    #[test]
    fn test_results_summary() {
        assert_eq!(results_summary(2, 3), "Showing 2 of 3 results");
    }
}
