//! City Database Model
//!
//! A curated table of well-known cities mapped to IANA timezone
//! identifiers, with short aliases for lookup from the command line.

use chrono_tz::Tz;

/// A city entry in the static registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct City {
    /// Display name (e.g. "New York")
    pub name: &'static str,
    /// Country or territory
    pub country: &'static str,
    /// IANA timezone the city observes
    pub tz: Tz,
    /// Short aliases accepted by lookup (e.g. "NYC")
    pub aliases: &'static [&'static str],
}

impl City {
    /// IANA identifier of the city's timezone
    pub fn tz_name(&self) -> &'static str {
        self.tz.name()
    }

    /// Case-insensitive match against name or any alias
    pub fn matches(&self, query: &str) -> bool {
        self.name.eq_ignore_ascii_case(query)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(query))
    }
}

/// The built-in city table, covering every inhabited continent and all
/// common UTC offsets (including the half- and quarter-hour ones).
pub const CITIES: &[City] = &[
    // Americas
    City { name: "Anchorage", country: "United States", tz: Tz::America__Anchorage, aliases: &["ANC"] },
    City { name: "Bogota", country: "Colombia", tz: Tz::America__Bogota, aliases: &["BOG"] },
    City { name: "Buenos Aires", country: "Argentina", tz: Tz::America__Argentina__Buenos_Aires, aliases: &["BA", "EZE"] },
    City { name: "Chicago", country: "United States", tz: Tz::America__Chicago, aliases: &["CHI", "ORD"] },
    City { name: "Denver", country: "United States", tz: Tz::America__Denver, aliases: &["DEN"] },
    City { name: "Halifax", country: "Canada", tz: Tz::America__Halifax, aliases: &["YHZ"] },
    City { name: "Honolulu", country: "United States", tz: Tz::Pacific__Honolulu, aliases: &["HNL"] },
    City { name: "Lima", country: "Peru", tz: Tz::America__Lima, aliases: &["LIM"] },
    City { name: "Los Angeles", country: "United States", tz: Tz::America__Los_Angeles, aliases: &["LA", "LAX"] },
    City { name: "Mexico City", country: "Mexico", tz: Tz::America__Mexico_City, aliases: &["CDMX", "MEX"] },
    City { name: "New York", country: "United States", tz: Tz::America__New_York, aliases: &["NYC", "JFK"] },
    City { name: "Santiago", country: "Chile", tz: Tz::America__Santiago, aliases: &["SCL"] },
    City { name: "Sao Paulo", country: "Brazil", tz: Tz::America__Sao_Paulo, aliases: &["GRU", "SP"] },
    City { name: "Toronto", country: "Canada", tz: Tz::America__Toronto, aliases: &["YYZ"] },
    City { name: "Vancouver", country: "Canada", tz: Tz::America__Vancouver, aliases: &["YVR"] },
    // Europe
    City { name: "Amsterdam", country: "Netherlands", tz: Tz::Europe__Amsterdam, aliases: &["AMS"] },
    City { name: "Athens", country: "Greece", tz: Tz::Europe__Athens, aliases: &["ATH"] },
    City { name: "Berlin", country: "Germany", tz: Tz::Europe__Berlin, aliases: &["BER"] },
    City { name: "Dublin", country: "Ireland", tz: Tz::Europe__Dublin, aliases: &["DUB"] },
    City { name: "Helsinki", country: "Finland", tz: Tz::Europe__Helsinki, aliases: &["HEL"] },
    City { name: "Istanbul", country: "Turkey", tz: Tz::Europe__Istanbul, aliases: &["IST"] },
    City { name: "Kyiv", country: "Ukraine", tz: Tz::Europe__Kiev, aliases: &["KBP", "Kiev"] },
    City { name: "Lisbon", country: "Portugal", tz: Tz::Europe__Lisbon, aliases: &["LIS"] },
    City { name: "London", country: "United Kingdom", tz: Tz::Europe__London, aliases: &["LDN", "LHR"] },
    City { name: "Madrid", country: "Spain", tz: Tz::Europe__Madrid, aliases: &["MAD"] },
    City { name: "Moscow", country: "Russia", tz: Tz::Europe__Moscow, aliases: &["MOW"] },
    City { name: "Paris", country: "France", tz: Tz::Europe__Paris, aliases: &["CDG"] },
    City { name: "Rome", country: "Italy", tz: Tz::Europe__Rome, aliases: &["FCO"] },
    City { name: "Stockholm", country: "Sweden", tz: Tz::Europe__Stockholm, aliases: &["STO"] },
    City { name: "Zurich", country: "Switzerland", tz: Tz::Europe__Zurich, aliases: &["ZRH"] },
    // Africa and Middle East
    City { name: "Cairo", country: "Egypt", tz: Tz::Africa__Cairo, aliases: &["CAI"] },
    City { name: "Casablanca", country: "Morocco", tz: Tz::Africa__Casablanca, aliases: &["CMN"] },
    City { name: "Dubai", country: "United Arab Emirates", tz: Tz::Asia__Dubai, aliases: &["DXB"] },
    City { name: "Johannesburg", country: "South Africa", tz: Tz::Africa__Johannesburg, aliases: &["JNB"] },
    City { name: "Lagos", country: "Nigeria", tz: Tz::Africa__Lagos, aliases: &["LOS"] },
    City { name: "Nairobi", country: "Kenya", tz: Tz::Africa__Nairobi, aliases: &["NBO"] },
    City { name: "Riyadh", country: "Saudi Arabia", tz: Tz::Asia__Riyadh, aliases: &["RUH"] },
    City { name: "Tehran", country: "Iran", tz: Tz::Asia__Tehran, aliases: &["IKA"] },
    City { name: "Tel Aviv", country: "Israel", tz: Tz::Asia__Jerusalem, aliases: &["TLV"] },
    // Asia
    City { name: "Bangkok", country: "Thailand", tz: Tz::Asia__Bangkok, aliases: &["BKK"] },
    City { name: "Beijing", country: "China", tz: Tz::Asia__Shanghai, aliases: &["PEK"] },
    City { name: "Dhaka", country: "Bangladesh", tz: Tz::Asia__Dhaka, aliases: &["DAC"] },
    City { name: "Ho Chi Minh City", country: "Vietnam", tz: Tz::Asia__Ho_Chi_Minh, aliases: &["Saigon", "SGN"] },
    City { name: "Hong Kong", country: "China", tz: Tz::Asia__Hong_Kong, aliases: &["HK", "HKG"] },
    City { name: "Jakarta", country: "Indonesia", tz: Tz::Asia__Jakarta, aliases: &["CGK"] },
    City { name: "Karachi", country: "Pakistan", tz: Tz::Asia__Karachi, aliases: &["KHI"] },
    City { name: "Kathmandu", country: "Nepal", tz: Tz::Asia__Kathmandu, aliases: &["KTM"] },
    City { name: "Mumbai", country: "India", tz: Tz::Asia__Kolkata, aliases: &["BOM"] },
    City { name: "New Delhi", country: "India", tz: Tz::Asia__Kolkata, aliases: &["Delhi", "DEL"] },
    City { name: "Manila", country: "Philippines", tz: Tz::Asia__Manila, aliases: &["MNL"] },
    City { name: "Seoul", country: "South Korea", tz: Tz::Asia__Seoul, aliases: &["ICN"] },
    City { name: "Shanghai", country: "China", tz: Tz::Asia__Shanghai, aliases: &["SHA"] },
    City { name: "Singapore", country: "Singapore", tz: Tz::Asia__Singapore, aliases: &["SG", "SIN"] },
    City { name: "Taipei", country: "Taiwan", tz: Tz::Asia__Taipei, aliases: &["TPE"] },
    City { name: "Tokyo", country: "Japan", tz: Tz::Asia__Tokyo, aliases: &["TYO", "HND"] },
    // Oceania
    City { name: "Adelaide", country: "Australia", tz: Tz::Australia__Adelaide, aliases: &["ADL"] },
    City { name: "Auckland", country: "New Zealand", tz: Tz::Pacific__Auckland, aliases: &["AKL"] },
    City { name: "Brisbane", country: "Australia", tz: Tz::Australia__Brisbane, aliases: &["BNE"] },
    City { name: "Melbourne", country: "Australia", tz: Tz::Australia__Melbourne, aliases: &["MEL"] },
    City { name: "Perth", country: "Australia", tz: Tz::Australia__Perth, aliases: &["PER"] },
    City { name: "Sydney", country: "Australia", tz: Tz::Australia__Sydney, aliases: &["SYD"] },
];
