use geocoder_rs::{types::Config, Geocoder};

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::FmtSubscriber;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

#[tokio::main]
async fn main() {
    #[cfg(feature = "tracing")]
    init_tracing();

    let ip = std::env::args().nth(1).unwrap_or_else(|| "8.8.8.8".to_string());

    let geocoder = Geocoder::init(Some(Config {
        tomtom_api_key: std::env::var("TOMTOM_API_KEY").unwrap_or_default(),
        geoapify_api_key: std::env::var("GEOAPIFY_API_KEY").unwrap_or_default(),
        ..Config::default()
    }));

    let location = match geocoder.ip_api.lookup(&ip).await {
        Ok(location) => location,
        Err(e) => {
            eprintln!("ip-api lookup failed: {e}");
            return;
        }
    };
    println!("{ip}: {location:?}");

    let (Some(lat), Some(lon)) = (location.lat, location.lon) else {
        return;
    };

    match geocoder.tomtom.reverse_geocode(lat, lon).await {
        Ok(response) => println!("TomTom: {:?}", response.first_address()),
        Err(e) => eprintln!("TomTom: {e}"),
    }

    match geocoder.nominatim.reverse(lat, lon).await {
        Ok(place) => println!("Nominatim postcode: {:?}", place.postcode()),
        Err(e) => eprintln!("Nominatim: {e}"),
    }

    match geocoder.geoapify.reverse(lat, lon).await {
        Ok(response) => println!("Geoapify postcode: {:?}", response.postcode()),
        Err(e) => eprintln!("Geoapify: {e}"),
    }
}
