#[cfg(test)]
mod tests {
    use crate::schemas::ApiDoc;
    use utoipa::OpenApi;
    use utoipa::openapi::{PathItemType, RefOr, schema::Schema};

    #[test]
    fn test_openapi_schema_generation() {
        let openapi = ApiDoc::openapi();

        assert!(openapi.components.is_some());
        let components = openapi.components.as_ref().unwrap();
        assert!(components.schemas.contains_key("WeatherForecastResponse"));

        let json_result = serde_json::to_string(&openapi);
        assert!(json_result.is_ok());
    }

    #[test]
    fn test_forecast_response_schema_structure() {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.as_ref().unwrap();
        let schema = components.schemas.get("WeatherForecastResponse").unwrap();

        if let RefOr::T(Schema::Object(obj)) = schema {
            let properties = &obj.properties;
            assert!(properties.contains_key("date"));
            assert!(properties.contains_key("temperatureInCelsius"));
            assert!(properties.contains_key("summary"));
            assert!(properties.contains_key("temperatureInFahrenheit"));
            assert_eq!(properties.len(), 4);
        } else {
            panic!("WeatherForecastResponse should be an object schema");
        }
    }

    #[test]
    fn test_openapi_paths_contain_forecast_endpoint() {
        let openapi = ApiDoc::openapi();

        let forecast_path = openapi
            .paths
            .paths
            .get("/api/weatherforecast")
            .expect("forecast path should be documented");
        let forecast_get = forecast_path
            .operations
            .get(&PathItemType::Get)
            .expect("forecast path should document GET");

        let responses = &forecast_get.responses;
        assert!(responses.responses.contains_key("200"));
        assert!(responses.responses.contains_key("400"));

        let parameters = forecast_get.parameters.as_ref().unwrap();
        assert!(parameters.iter().any(|p| p.name == "days"));
    }
}
