use std::{error::Error,
          fs::File,
          io::Write};
use riemann_sum as rs;

fn main() -> Result<(), Box<dyn Error>> {
    let path = "/tmp/riemann_bars.tex";
    let mut fh = File::create(path)?;
    write!(fh, "\\documentclass[12pt,a4paper]{{article}}\n\
                \\usepackage{{tikz}}\n\
                \\begin{{document}}\n\
                \\begin{{tikzpicture}}\n")?;
    let g = rs::RiemannGraph::fun(|x| (-x.powi(2)).exp(), -2.5, 2.5)
        .n(200).bars(-2., 2., 16).edge(rs::Edge::Right).build()?;
    g.latex().write(&mut fh)?;
    write!(fh, "\\end{{tikzpicture}}\n\
                \\end{{document}}")?;
    println!("Run \"latex {}\"; bar area = {:.6}.", path, g.area().unwrap());
    Ok(())
}
