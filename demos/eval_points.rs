use imago::{ImageExpr, Point};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let s = include_str!("../tests/data/scene_basic.json");
    let scene = ImageExpr::from_json_str(s)?;
    let image = scene.build()?;

    for (x, y) in [(0.5, 0.5), (1.5, 0.5), (3.0, 4.0), (10.0, 0.0)] {
        let c = image.eval(Point::new(x, y));
        println!("({x}, {y}) -> #{:02x}{:02x}{:02x}", c.r, c.g, c.b);
    }

    Ok(())
}
