use serde::{Deserialize, Serialize};

/// one raw row of the route table. every column is optional text; numeric
/// coercion happens when converting into a [`super::RouteRecord`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteRow {
    #[serde(rename = "ID")]
    pub id: Option<String>,
    #[serde(rename = "Departure City")]
    pub departure_city: Option<String>,
    #[serde(rename = "Arrival City")]
    pub arrival_city: Option<String>,
    #[serde(rename = "Departure Coordinates")]
    pub departure_coordinates: Option<String>,
    #[serde(rename = "Arrival Coordinates")]
    pub arrival_coordinates: Option<String>,
    #[serde(rename = "Departure Country")]
    pub departure_country: Option<String>,
    #[serde(rename = "Arrival Country")]
    pub arrival_country: Option<String>,
    #[serde(rename = "Departure Region")]
    pub departure_region: Option<String>,
    #[serde(rename = "Arrival Region")]
    pub arrival_region: Option<String>,
    #[serde(rename = "Train CO2")]
    pub train_co2: Option<String>,
    #[serde(rename = "Train Energy Resource Consumption")]
    pub train_energy: Option<String>,
    #[serde(rename = "Train Products")]
    pub train_products: Option<String>,
    #[serde(rename = "Train Duration")]
    pub train_duration: Option<String>,
    #[serde(rename = "Car CO2")]
    pub car_co2: Option<String>,
    #[serde(rename = "Car Energy Resource Consumption")]
    pub car_energy: Option<String>,
    #[serde(rename = "Car Products")]
    pub car_products: Option<String>,
    #[serde(rename = "Car Duration")]
    pub car_duration: Option<String>,
    #[serde(rename = "Flight CO2")]
    pub flight_co2: Option<String>,
    #[serde(rename = "Flight Energy Resource Consumption")]
    pub flight_energy: Option<String>,
    #[serde(rename = "Flight Products")]
    pub flight_products: Option<String>,
    #[serde(rename = "Flight Duration")]
    pub flight_duration: Option<String>,
    #[serde(rename = "train_flight_duration_delta")]
    pub train_flight_duration_delta: Option<String>,
    #[serde(rename = "train_market_share")]
    pub train_market_share: Option<String>,
    #[serde(rename = "flight_market_share")]
    pub flight_market_share: Option<String>,
    #[serde(rename = "avg_co2")]
    pub avg_co2: Option<String>,
    #[serde(rename = "avg_erc")]
    pub avg_energy: Option<String>,
    #[serde(rename = "avg_co2_w")]
    pub avg_co2_weighted: Option<String>,
    #[serde(rename = "avg_erc_w")]
    pub avg_energy_weighted: Option<String>,
    #[serde(rename = "distance")]
    pub distance: Option<String>,
}
