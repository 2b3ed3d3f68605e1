//! Compiled-in ISO 3166-2 subdivision data, one unit per country.
//!
//! Nothing here is registered automatically. A host picks the units it needs
//! and hands them to [Atlas::with_units](crate::Atlas::with_units) (or
//! registers them one by one); [ALL] is the full set.

use crate::normalize::normalize;
use crate::subdivision::{SubdivisionData, SubdivisionInfo};

/// Subdivision table for one country: `(full code, name, type)` rows in code order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubdivisionUnit {
    pub country_code: &'static str,
    pub country_name: &'static str,
    pub entries: &'static [(&'static str, &'static str, &'static str)],
}

impl SubdivisionUnit {
    /// Owned, insertion-ordered map ready for registration.
    pub fn to_data(&self) -> SubdivisionData {
        self.entries
            .iter()
            .map(|(code, name, subdivision_type)| {
                (
                    (*code).to_string(),
                    SubdivisionInfo {
                        name: (*name).to_string(),
                        subdivision_type: (*subdivision_type).to_string(),
                    },
                )
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Compiled-in unit for an alpha-2 code (case-insensitive).
pub fn find(alpha2: &str) -> Option<&'static SubdivisionUnit> {
    let alpha2 = normalize(alpha2);
    ALL.iter().copied().find(|unit| unit.country_code == alpha2)
}

pub static ALL: &[&SubdivisionUnit] = &[&AU, &CA, &CH, &DE, &GB, &IN, &JP, &SE, &US];

pub static AU: SubdivisionUnit = SubdivisionUnit {
    country_code: "AU",
    country_name: "Australia",
    entries: &[
        ("AU-ACT", "Australian Capital Territory", "Territory"),
        ("AU-NSW", "New South Wales", "State"),
        ("AU-NT", "Northern Territory", "Territory"),
        ("AU-QLD", "Queensland", "State"),
        ("AU-SA", "South Australia", "State"),
        ("AU-TAS", "Tasmania", "State"),
        ("AU-VIC", "Victoria", "State"),
        ("AU-WA", "Western Australia", "State"),
    ],
};

pub static CA: SubdivisionUnit = SubdivisionUnit {
    country_code: "CA",
    country_name: "Canada",
    entries: &[
        ("CA-AB", "Alberta", "Province"),
        ("CA-BC", "British Columbia", "Province"),
        ("CA-MB", "Manitoba", "Province"),
        ("CA-NB", "New Brunswick", "Province"),
        ("CA-NL", "Newfoundland and Labrador", "Province"),
        ("CA-NS", "Nova Scotia", "Province"),
        ("CA-NT", "Northwest Territories", "Territory"),
        ("CA-NU", "Nunavut", "Territory"),
        ("CA-ON", "Ontario", "Province"),
        ("CA-PE", "Prince Edward Island", "Province"),
        ("CA-QC", "Quebec", "Province"),
        ("CA-SK", "Saskatchewan", "Province"),
        ("CA-YT", "Yukon", "Territory"),
    ],
};

pub static CH: SubdivisionUnit = SubdivisionUnit {
    country_code: "CH",
    country_name: "Switzerland",
    entries: &[
        ("CH-AG", "Aargau", "Canton"),
        ("CH-AI", "Appenzell Innerrhoden", "Canton"),
        ("CH-AR", "Appenzell Ausserrhoden", "Canton"),
        ("CH-BE", "Bern", "Canton"),
        ("CH-BL", "Basel-Landschaft", "Canton"),
        ("CH-BS", "Basel-Stadt", "Canton"),
        ("CH-FR", "Fribourg", "Canton"),
        ("CH-GE", "Genève", "Canton"),
        ("CH-GL", "Glarus", "Canton"),
        ("CH-GR", "Graubünden", "Canton"),
        ("CH-JU", "Jura", "Canton"),
        ("CH-LU", "Luzern", "Canton"),
        ("CH-NE", "Neuchâtel", "Canton"),
        ("CH-NW", "Nidwalden", "Canton"),
        ("CH-OW", "Obwalden", "Canton"),
        ("CH-SG", "Sankt Gallen", "Canton"),
        ("CH-SH", "Schaffhausen", "Canton"),
        ("CH-SO", "Solothurn", "Canton"),
        ("CH-SZ", "Schwyz", "Canton"),
        ("CH-TG", "Thurgau", "Canton"),
        ("CH-TI", "Ticino", "Canton"),
        ("CH-UR", "Uri", "Canton"),
        ("CH-VD", "Vaud", "Canton"),
        ("CH-VS", "Valais", "Canton"),
        ("CH-ZG", "Zug", "Canton"),
        ("CH-ZH", "Zürich", "Canton"),
    ],
};

pub static DE: SubdivisionUnit = SubdivisionUnit {
    country_code: "DE",
    country_name: "Germany",
    entries: &[
        ("DE-BB", "Brandenburg", "Land"),
        ("DE-BE", "Berlin", "Land"),
        ("DE-BW", "Baden-Württemberg", "Land"),
        ("DE-BY", "Bayern", "Land"),
        ("DE-HB", "Bremen", "Land"),
        ("DE-HE", "Hessen", "Land"),
        ("DE-HH", "Hamburg", "Land"),
        ("DE-MV", "Mecklenburg-Vorpommern", "Land"),
        ("DE-NI", "Niedersachsen", "Land"),
        ("DE-NW", "Nordrhein-Westfalen", "Land"),
        ("DE-RP", "Rheinland-Pfalz", "Land"),
        ("DE-SH", "Schleswig-Holstein", "Land"),
        ("DE-SL", "Saarland", "Land"),
        ("DE-SN", "Sachsen", "Land"),
        ("DE-ST", "Sachsen-Anhalt", "Land"),
        ("DE-TH", "Thüringen", "Land"),
    ],
};

pub static GB: SubdivisionUnit = SubdivisionUnit {
    country_code: "GB",
    country_name: "United Kingdom",
    entries: &[
        ("GB-BFS", "Belfast City", "District"),
        ("GB-BIR", "Birmingham", "Metropolitan district"),
        ("GB-BST", "Bristol, City of", "Unitary authority"),
        ("GB-CAM", "Cambridgeshire", "Two-tier county"),
        ("GB-CRF", "Cardiff", "Unitary authority"),
        ("GB-EAW", "England and Wales", "Nation"),
        ("GB-EDH", "Edinburgh, City of", "Council area"),
        ("GB-ENG", "England", "Country"),
        ("GB-GBN", "Great Britain", "Nation"),
        ("GB-GLG", "Glasgow City", "Council area"),
        ("GB-KEN", "Kent", "Two-tier county"),
        ("GB-LDS", "Leeds", "Metropolitan district"),
        ("GB-LIV", "Liverpool", "Metropolitan district"),
        ("GB-LND", "London, City of", "City corporation"),
        ("GB-MAN", "Manchester", "Metropolitan district"),
        ("GB-NIR", "Northern Ireland", "Province"),
        ("GB-OXF", "Oxfordshire", "Two-tier county"),
        ("GB-SCT", "Scotland", "Country"),
        ("GB-UKM", "United Kingdom", "Nation"),
        ("GB-WLS", "Wales", "Country"),
    ],
};

pub static IN: SubdivisionUnit = SubdivisionUnit {
    country_code: "IN",
    country_name: "India",
    entries: &[
        ("IN-AN", "Andaman and Nicobar Islands", "Union territory"),
        ("IN-AP", "Andhra Pradesh", "State"),
        ("IN-AR", "Arunachal Pradesh", "State"),
        ("IN-AS", "Assam", "State"),
        ("IN-BR", "Bihar", "State"),
        ("IN-CG", "Chhattisgarh", "State"),
        ("IN-CH", "Chandigarh", "Union territory"),
        ("IN-DH", "Dadra and Nagar Haveli and Daman and Diu", "Union territory"),
        ("IN-DL", "Delhi", "Union territory"),
        ("IN-GA", "Goa", "State"),
        ("IN-GJ", "Gujarat", "State"),
        ("IN-HP", "Himachal Pradesh", "State"),
        ("IN-HR", "Haryana", "State"),
        ("IN-JH", "Jharkhand", "State"),
        ("IN-JK", "Jammu and Kashmir", "Union territory"),
        ("IN-KA", "Karnataka", "State"),
        ("IN-KL", "Kerala", "State"),
        ("IN-LA", "Ladakh", "Union territory"),
        ("IN-LD", "Lakshadweep", "Union territory"),
        ("IN-MH", "Maharashtra", "State"),
        ("IN-ML", "Meghalaya", "State"),
        ("IN-MN", "Manipur", "State"),
        ("IN-MP", "Madhya Pradesh", "State"),
        ("IN-MZ", "Mizoram", "State"),
        ("IN-NL", "Nagaland", "State"),
        ("IN-OD", "Odisha", "State"),
        ("IN-PB", "Punjab", "State"),
        ("IN-PY", "Puducherry", "Union territory"),
        ("IN-RJ", "Rajasthan", "State"),
        ("IN-SK", "Sikkim", "State"),
        ("IN-TN", "Tamil Nadu", "State"),
        ("IN-TR", "Tripura", "State"),
        ("IN-TS", "Telangana", "State"),
        ("IN-UK", "Uttarakhand", "State"),
        ("IN-UP", "Uttar Pradesh", "State"),
        ("IN-WB", "West Bengal", "State"),
    ],
};

pub static JP: SubdivisionUnit = SubdivisionUnit {
    country_code: "JP",
    country_name: "Japan",
    entries: &[
        ("JP-01", "Hokkaido", "Prefecture"),
        ("JP-02", "Aomori", "Prefecture"),
        ("JP-03", "Iwate", "Prefecture"),
        ("JP-04", "Miyagi", "Prefecture"),
        ("JP-05", "Akita", "Prefecture"),
        ("JP-06", "Yamagata", "Prefecture"),
        ("JP-07", "Fukushima", "Prefecture"),
        ("JP-08", "Ibaraki", "Prefecture"),
        ("JP-09", "Tochigi", "Prefecture"),
        ("JP-10", "Gunma", "Prefecture"),
        ("JP-11", "Saitama", "Prefecture"),
        ("JP-12", "Chiba", "Prefecture"),
        ("JP-13", "Tôkyô", "Prefecture"),
        ("JP-14", "Kanagawa", "Prefecture"),
        ("JP-15", "Niigata", "Prefecture"),
        ("JP-16", "Toyama", "Prefecture"),
        ("JP-17", "Ishikawa", "Prefecture"),
        ("JP-18", "Fukui", "Prefecture"),
        ("JP-19", "Yamanashi", "Prefecture"),
        ("JP-20", "Nagano", "Prefecture"),
        ("JP-21", "Gifu", "Prefecture"),
        ("JP-22", "Shizuoka", "Prefecture"),
        ("JP-23", "Aichi", "Prefecture"),
        ("JP-24", "Mie", "Prefecture"),
        ("JP-25", "Shiga", "Prefecture"),
        ("JP-26", "Kyoto", "Prefecture"),
        ("JP-27", "Osaka", "Prefecture"),
        ("JP-28", "Hyogo", "Prefecture"),
        ("JP-29", "Nara", "Prefecture"),
        ("JP-30", "Wakayama", "Prefecture"),
        ("JP-31", "Tottori", "Prefecture"),
        ("JP-32", "Shimane", "Prefecture"),
        ("JP-33", "Okayama", "Prefecture"),
        ("JP-34", "Hiroshima", "Prefecture"),
        ("JP-35", "Yamaguchi", "Prefecture"),
        ("JP-36", "Tokushima", "Prefecture"),
        ("JP-37", "Kagawa", "Prefecture"),
        ("JP-38", "Ehime", "Prefecture"),
        ("JP-39", "Kochi", "Prefecture"),
        ("JP-40", "Fukuoka", "Prefecture"),
        ("JP-41", "Saga", "Prefecture"),
        ("JP-42", "Nagasaki", "Prefecture"),
        ("JP-43", "Kumamoto", "Prefecture"),
        ("JP-44", "Oita", "Prefecture"),
        ("JP-45", "Miyazaki", "Prefecture"),
        ("JP-46", "Kagoshima", "Prefecture"),
        ("JP-47", "Okinawa", "Prefecture"),
    ],
};

pub static SE: SubdivisionUnit = SubdivisionUnit {
    country_code: "SE",
    country_name: "Sweden",
    entries: &[
        ("SE-AB", "Stockholms län", "County"),
        ("SE-AC", "Västerbottens län", "County"),
        ("SE-BD", "Norrbottens län", "County"),
        ("SE-C", "Uppsala län", "County"),
        ("SE-D", "Södermanlands län", "County"),
        ("SE-E", "Östergötlands län", "County"),
        ("SE-F", "Jönköpings län", "County"),
        ("SE-G", "Kronobergs län", "County"),
        ("SE-H", "Kalmar län", "County"),
        ("SE-I", "Gotlands län", "County"),
        ("SE-K", "Blekinge län", "County"),
        ("SE-M", "Skåne län", "County"),
        ("SE-N", "Hallands län", "County"),
        ("SE-O", "Västra Götalands län", "County"),
        ("SE-S", "Värmlands län", "County"),
        ("SE-T", "Örebro län", "County"),
        ("SE-U", "Västmanlands län", "County"),
        ("SE-W", "Dalarnas län", "County"),
        ("SE-X", "Gävleborgs län", "County"),
        ("SE-Y", "Västernorrlands län", "County"),
        ("SE-Z", "Jämtlands län", "County"),
    ],
};

pub static US: SubdivisionUnit = SubdivisionUnit {
    country_code: "US",
    country_name: "United States",
    entries: &[
        ("US-AK", "Alaska", "State"),
        ("US-AL", "Alabama", "State"),
        ("US-AR", "Arkansas", "State"),
        ("US-AS", "American Samoa", "Outlying area"),
        ("US-AZ", "Arizona", "State"),
        ("US-CA", "California", "State"),
        ("US-CO", "Colorado", "State"),
        ("US-CT", "Connecticut", "State"),
        ("US-DC", "District of Columbia", "District"),
        ("US-DE", "Delaware", "State"),
        ("US-FL", "Florida", "State"),
        ("US-GA", "Georgia", "State"),
        ("US-GU", "Guam", "Outlying area"),
        ("US-HI", "Hawaii", "State"),
        ("US-IA", "Iowa", "State"),
        ("US-ID", "Idaho", "State"),
        ("US-IL", "Illinois", "State"),
        ("US-IN", "Indiana", "State"),
        ("US-KS", "Kansas", "State"),
        ("US-KY", "Kentucky", "State"),
        ("US-LA", "Louisiana", "State"),
        ("US-MA", "Massachusetts", "State"),
        ("US-MD", "Maryland", "State"),
        ("US-ME", "Maine", "State"),
        ("US-MI", "Michigan", "State"),
        ("US-MN", "Minnesota", "State"),
        ("US-MO", "Missouri", "State"),
        ("US-MP", "Northern Mariana Islands", "Outlying area"),
        ("US-MS", "Mississippi", "State"),
        ("US-MT", "Montana", "State"),
        ("US-NC", "North Carolina", "State"),
        ("US-ND", "North Dakota", "State"),
        ("US-NE", "Nebraska", "State"),
        ("US-NH", "New Hampshire", "State"),
        ("US-NJ", "New Jersey", "State"),
        ("US-NM", "New Mexico", "State"),
        ("US-NV", "Nevada", "State"),
        ("US-NY", "New York", "State"),
        ("US-OH", "Ohio", "State"),
        ("US-OK", "Oklahoma", "State"),
        ("US-OR", "Oregon", "State"),
        ("US-PA", "Pennsylvania", "State"),
        ("US-PR", "Puerto Rico", "Outlying area"),
        ("US-RI", "Rhode Island", "State"),
        ("US-SC", "South Carolina", "State"),
        ("US-SD", "South Dakota", "State"),
        ("US-TN", "Tennessee", "State"),
        ("US-TX", "Texas", "State"),
        ("US-UM", "United States Minor Outlying Islands", "Outlying area"),
        ("US-UT", "Utah", "State"),
        ("US-VA", "Virginia", "State"),
        ("US-VI", "Virgin Islands, U.S.", "Outlying area"),
        ("US-VT", "Vermont", "State"),
        ("US-WA", "Washington", "State"),
        ("US-WI", "Wisconsin", "State"),
        ("US-WV", "West Virginia", "State"),
        ("US-WY", "Wyoming", "State"),
    ],
};
