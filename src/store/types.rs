//! Record types for the world database
//!
//! Wire representation is camelCase JSON; storage columns are mapped onto
//! these structs by the explicit row-mapping functions in the MySQL store.

use serde::{Deserialize, Serialize};

/// A row of the `city` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    /// Server-assigned identifier. Ignored on input.
    #[serde(default)]
    pub id: i32,
    pub name: String,
    pub country_code: String,
    pub district: String,
    pub population: i32,
}

/// Insert payload for a new city. No identifier; the store assigns one.
///
/// Fields default to their zero values when absent, matching the loose
/// binding of the original endpoint. Present-but-mistyped fields still fail
/// deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewCity {
    pub name: String,
    pub country_code: String,
    pub district: String,
    pub population: i32,
}

impl NewCity {
    /// Build the City echoed back to the caller. The identifier is whatever
    /// the store reports; the MySQL store does not read back the
    /// auto-increment value and passes 0.
    pub fn into_city(self, id: i32) -> City {
        City {
            id,
            name: self.name,
            country_code: self.country_code,
            district: self.district,
            population: self.population,
        }
    }
}

/// A row of the `country` table.
///
/// Columns that are nullable in the world schema surface as `Option`;
/// `capital` keeps the 0-means-no-capital convention of the source data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub code: String,
    pub name: String,
    pub continent: String,
    pub region: String,
    pub surface_area: f32,
    pub indep_year: Option<i16>,
    pub population: i32,
    pub life_expectancy: Option<f32>,
    pub gnp: Option<f32>,
    pub gnp_old: Option<f32>,
    pub local_name: String,
    pub government_form: String,
    pub head_of_state: String,
    pub capital: i32,
    pub code2: String,
}

/// Response representation of a country with its capital resolved.
///
/// `capitalCity` is present only when the capital reference resolved to a
/// real city; a zero or dangling reference omits the field entirely.
#[derive(Debug, Clone, Serialize)]
pub struct CountryProfile {
    #[serde(flatten)]
    pub country: Country,
    #[serde(rename = "capitalCity", skip_serializing_if = "Option::is_none")]
    pub capital_city: Option<City>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_country() -> Country {
        Country {
            code: "JPN".to_string(),
            name: "Japan".to_string(),
            continent: "Asia".to_string(),
            region: "Eastern Asia".to_string(),
            surface_area: 377829.0,
            indep_year: Some(-660),
            population: 126714000,
            life_expectancy: Some(80.7),
            gnp: Some(3787042.0),
            gnp_old: Some(4192638.0),
            local_name: "Nihon/Nippon".to_string(),
            government_form: "Constitutional Monarchy".to_string(),
            head_of_state: "Akihito".to_string(),
            capital: 1532,
            code2: "JP".to_string(),
        }
    }

    #[test]
    fn test_city_json_shape() {
        let city = City {
            id: 1532,
            name: "Tokyo".to_string(),
            country_code: "JPN".to_string(),
            district: "Tokyo-to".to_string(),
            population: 7980230,
        };

        let value = serde_json::to_value(&city).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1532,
                "name": "Tokyo",
                "countryCode": "JPN",
                "district": "Tokyo-to",
                "population": 7980230,
            })
        );
    }

    #[test]
    fn test_new_city_missing_fields_default() {
        let new_city: NewCity = serde_json::from_value(json!({"name": "Testville"})).unwrap();
        assert_eq!(new_city.name, "Testville");
        assert_eq!(new_city.population, 0);
        assert_eq!(new_city.country_code, "");
    }

    #[test]
    fn test_new_city_rejects_mistyped_population() {
        let result: Result<NewCity, _> =
            serde_json::from_value(json!({"name": "Testville", "population": "many"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_profile_omits_unresolved_capital() {
        let profile = CountryProfile {
            country: sample_country(),
            capital_city: None,
        };

        let value = serde_json::to_value(&profile).unwrap();
        assert!(value.get("capitalCity").is_none());
        assert_eq!(value["code"], "JPN");
        assert_eq!(value["surfaceArea"], 377829.0);
    }

    #[test]
    fn test_profile_embeds_capital() {
        let profile = CountryProfile {
            country: sample_country(),
            capital_city: Some(City {
                id: 1532,
                name: "Tokyo".to_string(),
                country_code: "JPN".to_string(),
                district: "Tokyo-to".to_string(),
                population: 7980230,
            }),
        };

        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["capitalCity"]["name"], "Tokyo");
    }
}
