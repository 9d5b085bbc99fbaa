use dotscan::metrics::{noise_ratio, ClusterSummary};
use dotscan::{Bounds, Dbscan, Point, PointGenerator, TextSurface, draw_clusters, Palette};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== DBSCAN on a random canvas ===\n");

    let bounds = Bounds::new(640, 360, 20);
    let points = PointGenerator::new(bounds).random_state(7).generate(150)?;

    println!("Dataset: {} points on a {}x{} canvas\n", points.len(), bounds.width, bounds.height);

    // Same points, different density settings
    let configs = vec![
        (10.0, 1, "Tight radius"),
        (25.0, 1, "Medium radius"),
        (25.0, 3, "Medium radius, denser cores"),
        (60.0, 2, "Loose radius"),
    ];

    for &(radius, min_neighbors, description) in &configs {
        let result = Dbscan::new(radius, min_neighbors).fit(&points)?;
        println!(
            "DBSCAN(radius={}, min_neighbors={}): {} - {} clusters, {} noise ({:.0}% noise)",
            radius,
            min_neighbors,
            description,
            result.n_clusters(),
            result.n_noise(),
            noise_ratio(&result)? * 100.0
        );
    }

    println!("\n=== Chain example ===");
    let chain: Vec<Point> = [(0, 0), (1, 0), (2, 0), (50, 50)].into_iter().map(Point::from).collect();
    let result = Dbscan::new(2.0, 1).fit(&chain)?;
    println!("clusters: {:?}", result.clusters);
    println!("noise:    {:?}", result.noise);

    println!("\n=== Drawing (radius=25, min_neighbors=1) ===");
    let result = Dbscan::new(25.0, 1).fit(&points)?;
    let mut surface = TextSurface::new(bounds, 80, 22);
    draw_clusters(&mut surface, &result, &Palette::default(), false);
    print!("{}", surface.render());
    println!("{}", ClusterSummary::from_result(&result));

    Ok(())
}
