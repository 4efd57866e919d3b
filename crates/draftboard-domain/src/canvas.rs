//! Canvas frameworks: business model canvas, lean canvas, and value
//! proposition canvas
//!
//! Each canvas block wraps its principal string in a small named record so
//! stored JSON reads as `{"segment": "..."}` rather than a bare string, and
//! secondary attributes can ride along without schema changes.

use serde::{Deserialize, Serialize};

macro_rules! block {
    ($(#[$doc:meta])* $name:ident, $field:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            #[doc = "Principal text of this block item"]
            pub $field: String,
        }

        impl $name {
            #[doc = "Build from the principal text"]
            pub fn new(value: impl Into<String>) -> Self {
                Self { $field: value.into() }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self { $field: value }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self { $field: value.to_string() }
            }
        }
    };
}

block! {
    /// A customer segment
    CustomerSegment, segment
}
block! {
    /// A value proposition
    ValueProposition, proposition
}
block! {
    /// A distribution or communication channel
    Channel, channel
}
block! {
    /// A customer relationship mode
    CustomerRelationship, relationship
}
block! {
    /// A revenue stream
    RevenueStream, stream
}
block! {
    /// A key resource
    KeyResource, resource
}
block! {
    /// A key activity
    KeyActivity, activity
}
block! {
    /// A key partnership
    KeyPartnership, partner
}
block! {
    /// A cost structure item
    CostItem, cost
}
block! {
    /// A problem worth solving (lean canvas)
    Problem, problem
}
block! {
    /// A solution feature (lean canvas)
    SolutionFeature, feature
}
block! {
    /// A tracked metric (lean canvas)
    KeyMetric, metric
}
block! {
    /// A job the customer is trying to get done
    CustomerJob, job
}
block! {
    /// A customer pain
    Pain, pain
}
block! {
    /// A customer gain
    Gain, gain
}
block! {
    /// A product or service offered
    OfferedItem, item
}
block! {
    /// A pain reliever in the value map
    PainReliever, reliever
}
block! {
    /// A gain creator in the value map
    GainCreator, creator
}

/// Business model canvas payload - Osterwalder's nine building blocks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessModelCanvas {
    /// Who we serve
    #[serde(default)]
    pub customer_segments: Vec<CustomerSegment>,
    /// What we offer
    #[serde(default)]
    pub value_propositions: Vec<ValueProposition>,
    /// How we reach customers
    #[serde(default)]
    pub channels: Vec<Channel>,
    /// How we relate to customers
    #[serde(default)]
    pub customer_relationships: Vec<CustomerRelationship>,
    /// How we earn
    #[serde(default)]
    pub revenue_streams: Vec<RevenueStream>,
    /// What we need
    #[serde(default)]
    pub key_resources: Vec<KeyResource>,
    /// What we do
    #[serde(default)]
    pub key_activities: Vec<KeyActivity>,
    /// Who helps us
    #[serde(default)]
    pub key_partnerships: Vec<KeyPartnership>,
    /// What it costs
    #[serde(default)]
    pub cost_structure: Vec<CostItem>,
}

/// The single-statement unique value proposition of a lean canvas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniqueValueProposition {
    /// The proposition statement
    pub proposition: String,
    /// Optional X-for-Y style concept
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_level_concept: Option<String>,
}

/// Lean canvas payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeanCanvas {
    /// Top problems worth solving
    #[serde(default)]
    pub problem: Vec<Problem>,
    /// Target customer segments
    #[serde(default)]
    pub customer_segments: Vec<CustomerSegment>,
    /// Single clear message stating why we are different
    pub unique_value_proposition: UniqueValueProposition,
    /// Proposed solution features
    #[serde(default)]
    pub solution: Vec<SolutionFeature>,
    /// Paths to customers (plain strings, per the lean canvas convention)
    #[serde(default)]
    pub channels: Vec<String>,
    /// Revenue streams
    #[serde(default)]
    pub revenue_streams: Vec<RevenueStream>,
    /// Cost structure
    #[serde(default)]
    pub cost_structure: Vec<CostItem>,
    /// Key metrics to track
    #[serde(default)]
    pub key_metrics: Vec<KeyMetric>,
    /// Something that cannot be easily copied or bought
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unfair_advantage: Option<String>,
}

/// Customer side of the value proposition canvas
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProfile {
    /// Jobs the customer is trying to get done
    #[serde(default)]
    pub customer_jobs: Vec<CustomerJob>,
    /// Pains they experience
    #[serde(default)]
    pub pains: Vec<Pain>,
    /// Gains they hope for
    #[serde(default)]
    pub gains: Vec<Gain>,
}

/// Offering side of the value proposition canvas
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueMap {
    /// Products and services offered
    #[serde(default)]
    pub products_and_services: Vec<OfferedItem>,
    /// How the offering relieves pains
    #[serde(default)]
    pub pain_relievers: Vec<PainReliever>,
    /// How the offering creates gains
    #[serde(default)]
    pub gain_creators: Vec<GainCreator>,
}

/// Value proposition canvas payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuePropositionCanvas {
    /// Customer profile side
    #[serde(default)]
    pub customer_profile: CustomerProfile,
    /// Value map side
    #[serde(default)]
    pub value_map: ValueMap,
    /// Profile/map fit score percentage, if assessed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit_score: Option<u8>,
}
