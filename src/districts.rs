//! Static lookup tables for Madrid's administrative districts.
//!
//! District codes are 1-21. The tables here are the single source of truth;
//! callers map codes, names and postal codes through these functions instead
//! of carrying their own dictionaries.

/// One administrative district: numeric code and canonical display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct District {
    pub code: u8,
    pub name: &'static str,
}

/// The 21 districts, ordered by code.
pub const DISTRICTS: [District; 21] = [
    District { code: 1, name: "Centro" },
    District { code: 2, name: "Arganzuela" },
    District { code: 3, name: "Retiro" },
    District { code: 4, name: "Salamanca" },
    District { code: 5, name: "Chamartín" },
    District { code: 6, name: "Tetuán" },
    District { code: 7, name: "Chamberí" },
    District { code: 8, name: "Fuencarral-El Pardo" },
    District { code: 9, name: "Moncloa-Aravaca" },
    District { code: 10, name: "Latina" },
    District { code: 11, name: "Carabanchel" },
    District { code: 12, name: "Usera" },
    District { code: 13, name: "Puente de Vallecas" },
    District { code: 14, name: "Moratalaz" },
    District { code: 15, name: "Ciudad Lineal" },
    District { code: 16, name: "Hortaleza" },
    District { code: 17, name: "Villaverde" },
    District { code: 18, name: "Villa de Vallecas" },
    District { code: 19, name: "Vicálvaro" },
    District { code: 20, name: "San Blas-Canillejas" },
    District { code: 21, name: "Barajas" },
];

/// Canonical district name for a code, or None for codes outside 1-21.
pub fn district_name(code: u8) -> Option<&'static str> {
    DISTRICTS
        .iter()
        .find(|d| d.code == code)
        .map(|d| d.name)
}

/// District code for a canonical name (exact match), or None if unknown.
pub fn district_code(name: &str) -> Option<u8> {
    DISTRICTS
        .iter()
        .find(|d| d.name == name)
        .map(|d| d.code)
}

/// District code for a postal code within the city of Madrid.
///
/// Covers 28001-28055 plus 28070 (the Cibeles municipal registry). Postal
/// codes outside the city yield None.
pub fn postal_code_district(postal_code: u32) -> Option<u8> {
    let code = match postal_code {
        28001 => 4,
        28002 => 5,
        28003 => 7,
        28004 => 1,
        28005 => 1,
        28006 => 4,
        28007 => 3,
        28008 => 9,
        28009 => 3,
        28010 => 7,
        28011 => 11,
        28012 => 1,
        28013 => 1,
        28014 => 3,
        28015 => 7,
        28016 => 5,
        28017 => 15,
        28018 => 13,
        28019 => 10,
        28020 => 6,
        28021 => 17,
        28022 => 20,
        28023 => 9,
        28024 => 11,
        28025 => 10,
        28026 => 12,
        28027 => 15,
        28028 => 4,
        28029 => 6,
        28030 => 14,
        28031 => 19,
        28032 => 19,
        28033 => 16,
        28034 => 8,
        28035 => 8,
        28036 => 5,
        28037 => 20,
        28038 => 13,
        28039 => 6,
        28040 => 9,
        28041 => 12,
        28042 => 21,
        28043 => 16,
        28044 => 11,
        28045 => 2,
        28046 => 5,
        28047 => 11,
        28048 => 8,
        28049 => 8,
        28050 => 16,
        28051 => 18,
        28052 => 18,
        28053 => 13,
        28054 => 17,
        28055 => 18,
        28070 => 1,
        _ => return None,
    };
    Some(code)
}
