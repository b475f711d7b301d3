use minilearn::knn_predict;
use ndarray::array;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A small housing-style table: [latitude, longitude, lot sqft, living sqft]
    let features = array![
        [47.51, -122.26, 5650.0, 1180.0],
        [47.72, -122.32, 7242.0, 2570.0],
        [47.74, -122.23, 10000.0, 770.0],
        [47.52, -122.39, 5000.0, 1960.0],
        [47.62, -122.05, 8080.0, 1680.0],
        [47.66, -122.33, 6000.0, 1715.0],
        [47.70, -122.36, 9680.0, 1060.0],
        [47.56, -122.15, 6819.0, 1780.0],
    ];
    let prices = array![
        221_900.0, 538_000.0, 180_000.0, 604_000.0, 510_000.0, 425_000.0, 291_850.0, 469_000.0,
    ];

    let queries = array![
        [47.53, -122.27, 5700.0, 1200.0],
        [47.71, -122.31, 7300.0, 2500.0],
    ];
    let actual_prices = [230_000.0, 545_000.0];

    for (i, query) in queries.rows().into_iter().enumerate() {
        let guess = knn_predict(&features, &prices, &query.to_owned(), 3)?;
        let error = (actual_prices[i] - guess) * 100.0 / actual_prices[i];
        println!("Guess {:.0}, actual {:.0}, error {:.1}%", guess, actual_prices[i], error);
    }

    Ok(())
}
