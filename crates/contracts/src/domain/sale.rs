use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Date format used by the products endpoint (`31/12/2021`)
pub const BR_DATE_FORMAT: &str = "%d/%m/%Y";

/// One product sale as delivered by the products endpoint.
///
/// Wire names are the pt-BR column headers of the source dataset; they are
/// mapped to typed fields once at ingestion. Each state carries a fixed
/// (lat, lon) pair, repeated on every record of that state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    #[serde(
        rename = "Data da Compra",
        deserialize_with = "deserialize_br_date",
        serialize_with = "serialize_br_date"
    )]
    pub purchase_date: NaiveDate,

    /// Sale price in BRL, non-negative
    #[serde(rename = "Preço")]
    pub price: f64,

    /// State where the sale happened (point of sale)
    #[serde(rename = "Local da compra")]
    pub state: String,

    /// One of the six fixed top-level regions
    #[serde(rename = "Região")]
    pub region: String,

    #[serde(rename = "Categoria do Produto")]
    pub category: String,

    #[serde(rename = "Vendedor")]
    pub seller: String,

    pub lat: f64,
    pub lon: f64,
}

fn deserialize_br_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDate::parse_from_str(&raw, BR_DATE_FORMAT).map_err(serde::de::Error::custom)
}

fn serialize_br_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.format(BR_DATE_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_products_payload() {
        let payload = r#"[
            {
                "Produto": "Xadrez de madeira",
                "Categoria do Produto": "brinquedos",
                "Preço": 25.9,
                "Frete": 10.19,
                "Data da Compra": "01/01/2020",
                "Vendedor": "Thiago Silva",
                "Local da compra": "BA",
                "Região": "Nordeste",
                "lat": -13.29,
                "lon": -41.71
            }
        ]"#;

        let records: Vec<SaleRecord> = serde_json::from_str(payload).unwrap();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(
            record.purchase_date,
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
        );
        assert_eq!(record.price, 25.9);
        assert_eq!(record.state, "BA");
        assert_eq!(record.region, "Nordeste");
        assert_eq!(record.category, "brinquedos");
        assert_eq!(record.seller, "Thiago Silva");
        assert_eq!(record.lat, -13.29);
        assert_eq!(record.lon, -41.71);
    }

    #[test]
    fn rejects_unparsable_date() {
        let payload = r#"{
            "Categoria do Produto": "livros",
            "Preço": 10.0,
            "Data da Compra": "2020-01-01",
            "Vendedor": "Ana",
            "Local da compra": "SP",
            "Região": "Sudeste",
            "lat": -22.19,
            "lon": -48.79
        }"#;

        assert!(serde_json::from_str::<SaleRecord>(payload).is_err());
    }

    #[test]
    fn date_round_trips_in_wire_format() {
        let record = SaleRecord {
            purchase_date: NaiveDate::from_ymd_opt(2021, 12, 31).unwrap(),
            price: 99.9,
            state: "RJ".to_string(),
            region: "Sudeste".to_string(),
            category: "eletronicos".to_string(),
            seller: "Beatriz Moraes".to_string(),
            lat: -22.25,
            lon: -42.66,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["Data da Compra"], "31/12/2021");
    }
}
