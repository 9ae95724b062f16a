use serde::{Deserialize, Serialize};

// Display-only sub-records. A partial record from the API keeps the
// restaurant; missing fields fall back to empty values.

/// Cuisine tag attached to a restaurant
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Cuisine {
    pub unique_name: String,
    pub name: String,
}

/// Restaurant rating summary
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Rating {
    pub count: u64,
    pub star_rating: f64,
}

/// Restaurant street address
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub first_line: String,
    pub postal_code: String,
}

/// Delivery time window in minutes; either bound may be missing
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryEta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_lower: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_upper: Option<u32>,
}

/// Restaurant record from the discovery API
///
/// Only the fields the result pipeline and the card renderer read are
/// modelled. Everything the API may omit is an `Option`; filters treat a
/// missing boolean as `false` and sorts place a missing key last.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisines: Option<Vec<Cuisine>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_open_now_for_delivery: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_delivery_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drive_distance_meters: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_eta_minutes: Option<DeliveryEta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

impl Restaurant {
    /// Cuisines as a slice, empty when the API omitted them
    pub fn cuisines(&self) -> &[Cuisine] {
        self.cuisines.as_deref().unwrap_or(&[])
    }

    pub fn is_open_now(&self) -> bool {
        self.is_open_now_for_delivery.unwrap_or(false)
    }

    pub fn is_new(&self) -> bool {
        self.is_new.unwrap_or(false)
    }

    /// Free delivery means a cost of exactly zero; an unknown cost is not free
    pub fn has_free_delivery(&self) -> bool {
        self.delivery_cost == Some(0.0)
    }
}

/// Accept ids sent either as JSON strings or as bare numbers
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}

/// Cuisine facet entry from the API metadata block
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CuisineDetail {
    pub unique_name: String,
    pub name: String,
    pub count: u64,
}

/// Metadata block returned alongside the restaurant list
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MetaData {
    #[serde(default)]
    pub cuisine_details: Vec<CuisineDetail>,
}

/// Envelope shape of the discovery response
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantEnvelope {
    #[serde(default)]
    pub restaurants: Vec<Restaurant>,
    #[serde(default)]
    pub meta_data: Option<MetaData>,
}

/// Discovery response: either a bare list or an envelope with metadata
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum RestaurantCollection {
    Bare(Vec<Restaurant>),
    Enveloped(RestaurantEnvelope),
}

impl RestaurantCollection {
    pub fn restaurants(&self) -> &[Restaurant] {
        match self {
            RestaurantCollection::Bare(restaurants) => restaurants,
            RestaurantCollection::Enveloped(envelope) => &envelope.restaurants,
        }
    }

    /// Metadata is only present on the envelope shape
    pub fn meta_data(&self) -> Option<&MetaData> {
        match self {
            RestaurantCollection::Bare(_) => None,
            RestaurantCollection::Enveloped(envelope) => envelope.meta_data.as_ref(),
        }
    }

    /// Split into the owned restaurant list and optional metadata
    pub fn into_parts(self) -> (Vec<Restaurant>, Option<MetaData>) {
        match self {
            RestaurantCollection::Bare(restaurants) => (restaurants, None),
            RestaurantCollection::Enveloped(envelope) => {
                (envelope.restaurants, envelope.meta_data)
            }
        }
    }
}

/// Parse a discovery response body
pub fn parse_collection(body: &str) -> Result<RestaurantCollection, serde_json::Error> {
    serde_json::from_str(body)
}
