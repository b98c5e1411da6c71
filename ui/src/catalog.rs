//! Closed option lists shared by the forms, plus the map's property fixtures.
//!
//! Every option knows its form value (what a `<select>` submits) and its
//! localized label.

use crate::i18n::Language;

/// A value offered by a `<select>` or checkbox group.
pub trait SelectOption: Copy + PartialEq + 'static {
    const ALL: &'static [Self];

    fn value(self) -> &'static str;

    fn label(self, lang: Language) -> String;

    fn from_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|option| option.value() == value)
    }
}

macro_rules! select_option {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $variant:ident => ($value:literal, $key:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant ),+
        }

        impl SelectOption for $name {
            const ALL: &'static [Self] = &[ $( $name::$variant ),+ ];

            fn value(self) -> &'static str {
                match self {
                    $( $name::$variant => $value ),+
                }
            }

            fn label(self, lang: Language) -> String {
                match self {
                    $( $name::$variant => crate::t!(lang, $key) ),+
                }
            }
        }
    };
}

select_option! {
    pub enum PropertyType {
        Condo => ("condo", "property-type-condo"),
        House => ("house", "property-type-house"),
        Townhouse => ("townhouse", "property-type-townhouse"),
        Apartment => ("apartment", "property-type-apartment"),
    }
}

impl PropertyType {
    /// Types offered when adding a comparison entry.
    pub const COMPARABLE: [PropertyType; 3] =
        [PropertyType::Condo, PropertyType::House, PropertyType::Townhouse];
}

select_option! {
    /// Property-type filter on the market trends form.
    pub enum MarketSegment {
        All => ("all", "property-type-all"),
        Condo => ("condo", "property-type-condo"),
        House => ("house", "property-type-house"),
        Townhouse => ("townhouse", "property-type-townhouse"),
    }
}

select_option! {
    pub enum Province {
        Bangkok => ("bangkok", "province-bangkok"),
        Nonthaburi => ("nonthaburi", "province-nonthaburi"),
        PathumThani => ("pathum_thani", "province-pathum-thani"),
        SamutPrakan => ("samut_prakan", "province-samut-prakan"),
        ChiangMai => ("chiang_mai", "province-chiang-mai"),
        Phuket => ("phuket", "province-phuket"),
    }
}

select_option! {
    pub enum Condition {
        Excellent => ("excellent", "condition-excellent"),
        Good => ("good", "condition-good"),
        Fair => ("fair", "condition-fair"),
        Poor => ("poor", "condition-poor"),
    }
}

select_option! {
    pub enum Amenity {
        Pool => ("pool", "amenity-pool"),
        Gym => ("gym", "amenity-gym"),
        Security => ("security", "amenity-security"),
        Parking => ("parking", "amenity-parking"),
        Garden => ("garden", "amenity-garden"),
        Playground => ("playground", "amenity-playground"),
    }
}

select_option! {
    pub enum RiskLevel {
        Low => ("low", "risk-low"),
        Medium => ("medium", "risk-medium"),
        High => ("high", "risk-high"),
    }
}

select_option! {
    /// Fixed forecast horizons, nearest first.
    pub enum Horizon {
        ThreeMonths => ("3m", "horizon-3m"),
        SixMonths => ("6m", "horizon-6m"),
        OneYear => ("1y", "horizon-1y"),
        TwoYears => ("2y", "horizon-2y"),
        FiveYears => ("5y", "horizon-5y"),
    }
}

impl Horizon {
    pub const fn months(self) -> u32 {
        match self {
            Horizon::ThreeMonths => 3,
            Horizon::SixMonths => 6,
            Horizon::OneYear => 12,
            Horizon::TwoYears => 24,
            Horizon::FiveYears => 60,
        }
    }
}

select_option! {
    pub enum Sentiment {
        Bullish => ("bullish", "sentiment-bullish"),
        Bearish => ("bearish", "sentiment-bearish"),
        Neutral => ("neutral", "sentiment-neutral"),
    }
}

select_option! {
    pub enum MarketFactor {
        Location => ("location", "factor-location"),
        Infrastructure => ("infrastructure", "factor-infrastructure"),
        Economy => ("economy", "factor-economy"),
        InterestRates => ("interest_rates", "factor-interest-rates"),
        SupplyDemand => ("supply_demand", "factor-supply-demand"),
        GovernmentPolicy => ("government_policy", "factor-government-policy"),
    }
}

select_option! {
    pub enum Timeframe {
        ThreeMonths => ("3m", "timeframe-3m"),
        SixMonths => ("6m", "timeframe-6m"),
        OneYear => ("1y", "timeframe-1y"),
        TwoYears => ("2y", "timeframe-2y"),
    }
}

select_option! {
    pub enum ForecastPeriod {
        Short => ("short", "forecast-period-short"),
        Medium => ("medium", "forecast-period-medium"),
        Long => ("long", "forecast-period-long"),
    }
}

select_option! {
    pub enum Month {
        Jan => ("jan", "month-jan"),
        Feb => ("feb", "month-feb"),
        Mar => ("mar", "month-mar"),
        Apr => ("apr", "month-apr"),
        May => ("may", "month-may"),
        Jun => ("jun", "month-jun"),
    }
}

select_option! {
    /// Property kinds used by the map fixtures.
    pub enum ListingKind {
        Condo => ("Condo", "map-type-condo"),
        House => ("House", "map-type-house"),
        Land => ("Land", "map-type-land"),
        Townhouse => ("Townhouse", "map-type-townhouse"),
        Commercial => ("Commercial", "map-type-commercial"),
    }
}

select_option! {
    pub enum Furnishing {
        Yes => ("Yes", "map-furnished-yes"),
        No => ("No", "map-furnished-no"),
        Partial => ("Partial", "map-furnished-partial"),
        NotApplicable => ("N/A", "map-furnished-na"),
    }
}

/// A listing shown on the property map. Immutable fixture data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyRecord {
    pub id: u32,
    pub kind: ListingKind,
    pub location: &'static str,
    pub price: u64,
    pub size_sqm: u32,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub furnished: Furnishing,
    pub lat: f64,
    pub lon: f64,
}

impl PropertyRecord {
    /// Display name, e.g. `Condo Bangkok`.
    pub fn name(&self) -> String {
        format!("{} {}", self.kind.value(), self.location)
    }
}

pub const PROPERTIES: [PropertyRecord; 8] = [
    PropertyRecord {
        id: 1,
        kind: ListingKind::Condo,
        location: "Bangkok",
        price: 5_500_000,
        size_sqm: 45,
        bedrooms: 1,
        bathrooms: 1,
        furnished: Furnishing::Yes,
        lat: 13.7563,
        lon: 100.5018,
    },
    PropertyRecord {
        id: 2,
        kind: ListingKind::House,
        location: "Chiang Mai",
        price: 3_200_000,
        size_sqm: 120,
        bedrooms: 3,
        bathrooms: 2,
        furnished: Furnishing::No,
        lat: 18.7883,
        lon: 98.9853,
    },
    PropertyRecord {
        id: 3,
        kind: ListingKind::Townhouse,
        location: "Phuket",
        price: 4_800_000,
        size_sqm: 85,
        bedrooms: 2,
        bathrooms: 2,
        furnished: Furnishing::Partial,
        lat: 7.8804,
        lon: 98.3923,
    },
    PropertyRecord {
        id: 4,
        kind: ListingKind::Condo,
        location: "Pattaya",
        price: 2_800_000,
        size_sqm: 35,
        bedrooms: 1,
        bathrooms: 1,
        furnished: Furnishing::Yes,
        lat: 12.9236,
        lon: 100.8825,
    },
    PropertyRecord {
        id: 5,
        kind: ListingKind::Land,
        location: "Hua Hin",
        price: 1_500_000,
        size_sqm: 400,
        bedrooms: 0,
        bathrooms: 0,
        furnished: Furnishing::NotApplicable,
        lat: 12.5664,
        lon: 99.9581,
    },
    PropertyRecord {
        id: 6,
        kind: ListingKind::Commercial,
        location: "Bangkok",
        price: 12_000_000,
        size_sqm: 200,
        bedrooms: 0,
        bathrooms: 3,
        furnished: Furnishing::No,
        lat: 13.7398,
        lon: 100.5501,
    },
    PropertyRecord {
        id: 7,
        kind: ListingKind::House,
        location: "Koh Samui",
        price: 8_500_000,
        size_sqm: 150,
        bedrooms: 4,
        bathrooms: 3,
        furnished: Furnishing::Yes,
        lat: 9.5357,
        lon: 100.0614,
    },
    PropertyRecord {
        id: 8,
        kind: ListingKind::Condo,
        location: "Bangkok",
        price: 7_200_000,
        size_sqm: 65,
        bedrooms: 2,
        bathrooms: 2,
        furnished: Furnishing::Partial,
        lat: 13.7308,
        lon: 100.5418,
    },
];
