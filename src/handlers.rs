pub mod weather_forecast;
