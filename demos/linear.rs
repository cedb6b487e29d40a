use std::{error::Error,
          fs::File,
          io::BufWriter};
use riemann_sum::{Edge, RiemannGraph};

fn main() -> Result<(), Box<dyn Error>> {
    let g = RiemannGraph::fun(|x| 3. * x + 4., 0., 5.)
        .bars(0., 5., 5).build()?;
    g.write(&mut BufWriter::new(File::create("/tmp/linear.dat")?))?;
    g.write_bars(&mut BufWriter::new(File::create("/tmp/linear_bars.dat")?))?;
    println!("Left-edge area: {}", g.area().unwrap());

    let g = RiemannGraph::fun(|x| 3. * x + 4., 0., 5.)
        .bars(0., 5., 5).edge(Edge::Right).build()?;
    println!("Right-edge area: {}", g.area().unwrap());
    Ok(())
}
