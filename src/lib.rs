//! Sample the graph of a function ℝ → ℝ on an interval and,
//! optionally, the Riemann bars approximating its definite integral
//! on a second, independent interval.  The sampling, the bars and the
//! figure viewport are handed to an external plotting surface either
//! as Gnuplot-compatible tabular data ([`RiemannGraph::write`]) or as
//! PGF/TikZ commands ([`RiemannGraph::latex`]); the signed bar area
//! is returned to the caller ([`RiemannGraph::area`]).
//!
//! # Example
//!
//! ```
//! use riemann_sum::RiemannGraph;
//! let g = RiemannGraph::fun(|x| 3. * x + 4., 0., 5.)
//!     .bars(0., 5., 5).build()?;
//! assert_eq!(g.area(), Some(50.));
//! # Ok::<(), riemann_sum::Error>(())
//! ```

use std::{fmt::{self, Display, Formatter},
          io::{self, Write}};
use rgb::RGB8;

/// Errors returned when assembling a [`RiemannGraph`].
#[non_exhaustive]
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// The curve needs at least 2 sample points.
    #[error("the curve needs at least 2 sample points, got {0}")]
    TooFewSamples(usize),
    /// An interval \[`a`, `b`\] must satisfy `a` < `b` with both
    /// bounds finite.
    #[error("the interval [{0}, {1}] is empty or not finite")]
    EmptyInterval(f64, f64),
    /// Bars were requested with no subinterval to put them in.
    #[error("bars need at least 1 subinterval")]
    NoBars,
    /// The function returned a non-finite value at `x`.
    #[error("the function value at x = {x} is not finite")]
    NotFinite { x: f64 },
}

/// A box \[`xmin`, `xmax`\] × \[`ymin`, `ymax`\], the figure viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl BoundingBox {
    /// Return `true` if the bounding box has a non-empty interior.
    /// The viewport derived for a constant function is flat
    /// (`ymin == ymax`), hence empty in this sense; it is still a
    /// valid viewport.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.xmin < self.xmax && self.ymin < self.ymax) // NAN ⟹ empty
    }
}

/// Which edge of each subinterval supplies the height of its bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
}

/// One term of the Riemann sum: the rectangle with corners
/// (`x`, 0) and (`x + width`, `height`).
///
/// `width` is signed: in right-edge mode it is negative so that a
/// surface anchoring rectangles at `x` grows them leftward, the bar
/// then covering the subinterval whose right end supplied `height`.
/// The area contribution is `height × width.abs()`; its sign follows
/// the height, never the width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub width: f64,
    pub height: f64,
}

impl Bar {
    /// Signed area of this bar.
    #[inline]
    pub fn area(&self) -> f64 {
        self.height * self.width.abs()
    }
}

fn check_interval(a: f64, b: f64) -> Result<(), Error> {
    if a.is_finite() && b.is_finite() && a < b {
        Ok(())
    } else {
        Err(Error::EmptyInterval(a, b))
    }
}

////////////////////////////////////////////////////////////////////////
//
// Sampling

/// `n` values of `f` at evenly spaced points of \[`a`, `b`\], both
/// endpoints included.  Assumes `a` < `b` and `n` ≥ 2.
fn sample<F>(f: &mut F, a: f64, b: f64, n: usize)
             -> Result<Vec<[f64; 2]>, Error>
where F: FnMut(f64) -> f64 {
    let dx = (b - a) / (n - 1) as f64;
    let mut path = Vec::with_capacity(n);
    for i in 0..n {
        // Pin the last point to `b`; rounding may drift off it.
        let x = if i + 1 == n { b } else { a + i as f64 * dx };
        let y = f(x);
        if !y.is_finite() {
            return Err(Error::NotFinite { x });
        }
        path.push([x, y]);
    }
    Ok(path)
}

/// Vertical display bounds: the range of the sampled values padded by
/// 20% of its span on each side.  A constant function has zero span
/// and collapses both bounds to its value.
fn display_bounds(curve: &[[f64; 2]]) -> (f64, f64) {
    let mut ymin = f64::INFINITY;
    let mut ymax = f64::NEG_INFINITY;
    for &[_, y] in curve {
        if y < ymin { ymin = y }
        if y > ymax { ymax = y }
    }
    let margin = 0.2 * (ymax - ymin);
    (ymin - margin, ymax + margin)
}

/// The `count` Riemann bars of `f` on \[`a`, `b`\] and their total
/// signed area.  Of the `count + 1` evenly spaced subinterval edges,
/// the left policy keeps edges `0 .. count` and the right policy
/// edges `1 ..= count`; the kept edge anchors its bar and supplies
/// the height.
fn riemann_bars<F>(f: &mut F, a: f64, b: f64, count: usize, edge: Edge)
                   -> Result<(Vec<Bar>, f64), Error>
where F: FnMut(f64) -> f64 {
    check_interval(a, b)?;
    if count < 1 {
        return Err(Error::NoBars);
    }
    let dx = (b - a) / count as f64;
    let width = match edge { Edge::Left => dx,  Edge::Right => -dx };
    let mut bars = Vec::with_capacity(count);
    let mut area = 0.;
    for i in 0..count {
        let x = match edge {
            Edge::Left => a + i as f64 * dx,
            Edge::Right =>
                if i + 1 == count { b } else { a + (i + 1) as f64 * dx },
        };
        let y = f(x);
        if !y.is_finite() {
            return Err(Error::NotFinite { x });
        }
        bars.push(Bar { x, width, height: y });
        area += y * dx;
    }
    Ok((bars, area))
}

////////////////////////////////////////////////////////////////////////
//
// Building a graph with standard options & checks

/// A sampled graph of a function with optional Riemann bars.
pub struct RiemannGraph {
    curve: Vec<[f64; 2]>,
    vp: BoundingBox,
    zero_line: bool,
    x_label: String,
    y_label: String,
    bars: Vec<Bar>,
    area: Option<f64>,
}

impl RiemannGraph {
    /// Create a graph of `f` on the interval \[`a`, `b`\], sampling
    /// `f` at evenly spaced values of its argument.  Options are set
    /// on the returned [`Fun`] and checked by [`Fun::build`].
    ///
    /// # Example
    ///
    /// ```
    /// use std::fs::File;
    /// use riemann_sum::RiemannGraph;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let g = RiemannGraph::fun(|x| x.sin(), 0., 4.).build()?;
    /// g.write(&mut File::create("target/fun.dat")?)?;
    /// # Ok(()) }
    /// ```
    #[must_use]
    pub fn fun<F>(f: F, a: f64, b: f64) -> Fun<F>
    where F: FnMut(f64) -> f64 {
        Fun { f, a, b,  // Order of `a`, `b` is checked by `build`
              n: 100,
              ylim: None,
              x_label: None,
              y_label: None,
              bars: None,
              edge: Edge::Left }
    }

    /// The sampled curve: (x, f(x)) pairs, x strictly increasing from
    /// one end of the graph interval to the other.
    #[inline]
    pub fn curve(&self) -> &[[f64; 2]] { &self.curve }

    /// The Riemann bars, left to right.  Empty when bars were not
    /// requested.
    #[inline]
    pub fn bars(&self) -> &[Bar] { &self.bars }

    /// Total signed area of the bars, or `None` when bars were not
    /// requested.  `None` is not 0: a bar sequence of total area 0
    /// yields `Some(0.)`.
    #[inline]
    pub fn area(&self) -> Option<f64> { self.area }

    /// The figure viewport: x bounds are the graph interval, y bounds
    /// are either the ones given to [`Fun::ylim`] or derived from the
    /// sampled values (their range padded by 20% of its span).
    #[inline]
    pub fn viewport(&self) -> BoundingBox { self.vp }

    /// `true` when the renderer should mark the y = 0 axis (the lower
    /// viewport bound does not already sit on it).
    #[inline]
    pub fn zero_line(&self) -> bool { self.zero_line }

    /// Label of the horizontal axis.
    #[inline]
    pub fn x_label(&self) -> &str { &self.x_label }

    /// Label of the vertical axis.
    #[inline]
    pub fn y_label(&self) -> &str { &self.y_label }
}

/// Options for the graph of a function ℝ → ℝ.  See
/// [`RiemannGraph::fun`].
pub struct Fun<F> {
    f: F,  a: f64,  b: f64,
    n: usize,
    ylim: Option<(f64, f64)>,
    x_label: Option<String>,
    y_label: Option<String>,
    bars: Option<(f64, f64, usize)>,
    edge: Edge,
}

impl<F> Fun<F>
where F: FnMut(f64) -> f64 {
    /// Set the number of evaluations of the function to build the
    /// curve.  Default: 100.  [`Fun::build`] requires `n` ≥ 2.
    pub fn n(mut self, n: usize) -> Self {
        self.n = n;
        self
    }

    /// Set explicit vertical bounds for the viewport instead of
    /// deriving them from the sampled values.
    pub fn ylim(mut self, ymin: f64, ymax: f64) -> Self {
        self.ylim = Some((ymin, ymax));
        self
    }

    /// Set the label of the horizontal axis.  Default: "x".
    pub fn xlabel(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    /// Set the label of the vertical axis.  Default: "y".
    pub fn ylabel(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    /// Request `count` Riemann bars on the interval \[`a`, `b`\].
    /// The bar interval is independent of the graph interval; it may
    /// lie inside it, contain it, or be disjoint from it.
    pub fn bars(mut self, a: f64, b: f64, count: usize) -> Self {
        self.bars = Some((a, b, count));
        self
    }

    /// Set which edge of each subinterval supplies the height of its
    /// bar.  Default: [`Edge::Left`].
    pub fn edge(mut self, edge: Edge) -> Self {
        self.edge = edge;
        self
    }

    /// Sample the function and compute the bars.  One-shot: every
    /// entity is built afresh and the function is not retried on
    /// failure.
    ///
    /// # Example
    ///
    /// ```
    /// use riemann_sum::{Edge, RiemannGraph};
    /// let g = RiemannGraph::fun(|x| 3. * x + 4., 0., 5.)
    ///     .bars(0., 5., 5).edge(Edge::Right).build()?;
    /// assert_eq!(g.area(), Some(65.));
    /// # Ok::<(), riemann_sum::Error>(())
    /// ```
    pub fn build(mut self) -> Result<RiemannGraph, Error> {
        check_interval(self.a, self.b)?;
        if self.n < 2 {
            return Err(Error::TooFewSamples(self.n));
        }
        let curve = sample(&mut self.f, self.a, self.b, self.n)?;
        let (ymin, ymax) = match self.ylim {
            Some(lim) => lim,
            None => display_bounds(&curve),
        };
        let (bars, area) = match self.bars {
            Some((a, b, count)) => {
                let (bars, area) =
                    riemann_bars(&mut self.f, a, b, count, self.edge)?;
                (bars, Some(area))
            }
            None => (Vec::new(), None),
        };
        Ok(RiemannGraph {
            curve,
            vp: BoundingBox { xmin: self.a, xmax: self.b, ymin, ymax },
            zero_line: ymin != 0.,
            x_label: self.x_label.unwrap_or_else(|| "x".to_string()),
            y_label: self.y_label.unwrap_or_else(|| "y".to_string()),
            bars,
            area,
        })
    }
}

////////////////////////////////////////////////////////////////////////
//
// Output

// The styling of the figure is fixed: blue curve, translucent bars
// with blue edges.
const BLUE: RGB8 = RGB8 { r: 0, g: 0, b: 255 };
const BAR_OPACITY: f64 = 0.2;

/// LaTeX output.
///
/// # Example
///
/// ```
/// use std::fs::File;
/// use riemann_sum::RiemannGraph;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let g = RiemannGraph::fun(|x| x.sin(), 0., 4.).bars(0., 4., 8)
///     .build()?;
/// g.latex().write(&mut File::create("target/graph.tex")?)?;
/// # Ok(()) }
/// ```
pub struct LaTeX<'a> {
    graph: &'a RiemannGraph,
    n: usize,
}

impl<'a> LaTeX<'a> {
    #[inline]
    fn new(g: &'a RiemannGraph) -> Self {
        Self { graph: g,  n: 20_000 }
    }

    /// Set the maximum number of points of a PGF path to `n`.  If the
    /// curve contains more than `n` points, it is drawn as several
    /// PGF paths.  Default: 20_000.
    pub fn n(&mut self, n: usize) -> &mut Self {
        self.n = n;
        self
    }

    fn write_bars(&self, f: &mut impl Write) -> Result<(), io::Error> {
        write!(f, "\\begin{{pgfscope}}\n\
                   \\pgfsetfillcolor{{RiemannSumColor}}\n\
                   \\pgfsetfillopacity{{{}}}\n\
                   \\pgfsetstrokecolor{{RiemannSumColor}}\n", BAR_OPACITY)?;
        for bar in self.graph.bars() {
            write!(f, "\\pgfpathrectanglecorners{{\\pgfpointxy\
                       {{{:.16}}}{{0}}}}{{\\pgfpointxy\
                       {{{:.16}}}{{{:.16}}}}}\n",
                   bar.x, bar.x + bar.width, bar.height)?;
        }
        write!(f, "\\pgfusepath{{fill,stroke}}\n\\end{{pgfscope}}\n")
    }

    fn write_zero_line(&self, f: &mut impl Write) -> Result<(), io::Error> {
        let vp = self.graph.viewport();
        write!(f, "\\begin{{pgfscope}}\n\
                   \\pgfsetdash{{{{3pt}}{{3pt}}}}{{0pt}}\n\
                   \\pgfpathmoveto{{\\pgfpointxy{{{:.16}}}{{0}}}}\n\
                   \\pgfpathlineto{{\\pgfpointxy{{{:.16}}}{{0}}}}\n\
                   \\pgfusepath{{stroke}}\n\
                   \\end{{pgfscope}}\n", vp.xmin, vp.xmax)
    }

    /// Write the curve with line segments.
    fn write_curve(&self, f: &mut impl Write) -> Result<(), io::Error> {
        write!(f, "\\pgfsetstrokecolor{{RiemannSumColor}}\n")?;
        let mut n = 0;
        for &[x, y] in self.graph.curve() {
            n += 1;
            if n == 1 {
                write!(f, "\\pgfpathmoveto{{\\pgfpointxy\
                           {{{:.16}}}{{{:.16}}}}}\n", x, y)?
            } else if n >= self.n {
                write!(f, "\\pgfpathlineto{{\\pgfpointxy\
                           {{{:.16}}}{{{:.16}}}}}\n\
                           \\pgfusepath{{stroke}}\n\
                           \\pgfpathmoveto{{\\pgfpointxy\
                           {{{:.16}}}{{{:.16}}}}}\n", x, y, x, y)?;
                n = 1;
            } else {
                write!(f, "\\pgfpathlineto{{\\pgfpointxy\
                           {{{:.16}}}{{{:.16}}}}}\n", x, y)?
            }
        }
        write!(f, "\\pgfusepath{{stroke}}\n")
    }

    /// Write the graph to `f` as PGF/TikZ commands: the bars (if any)
    /// behind, then the dashed y = 0 line when the viewport calls for
    /// it, then the curve.
    pub fn write(&self, f: &mut impl Write) -> Result<(), io::Error> {
        write!(f, "% Written by the Rust riemann_sum crate.\n")?;
        write!(f, "\\begin{{pgfscope}}\n")?;
        let RGB8 { r, g, b } = BLUE;
        write!(f, "\\definecolor{{RiemannSumColor}}{{RGB}}\
                   {{{},{},{}}}\n", r, g, b)?;
        if !self.graph.bars().is_empty() {
            self.write_bars(f)?;
        }
        if self.graph.zero_line() {
            self.write_zero_line(f)?;
        }
        self.write_curve(f)?;
        write!(f, "\\end{{pgfscope}}\n")
    }
}

/// # Output
impl RiemannGraph {
    /// Write the graph using PGF/TikZ commands.
    pub fn latex(&self) -> LaTeX<'_> { LaTeX::new(self) }

    /// Write the curve to `f` in a tabular form: each point is
    /// written as "x y" on a single line (in scientific notation).
    /// This format is compatible with Gnuplot.
    pub fn write(&self, f: &mut impl Write) -> Result<(), io::Error> {
        for &[x, y] in self.curve() {
            write!(f, "{:e} {:e}\n", x, y)?;
        }
        Ok(())
    }

    /// Write the bars to `f` in a tabular form: each bar is written
    /// as "x width height" on a single line (in scientific notation),
    /// for consumption by Gnuplot-style box plots.  Writes nothing
    /// when bars were not requested.
    pub fn write_bars(&self, f: &mut impl Write) -> Result<(), io::Error> {
        for bar in self.bars() {
            write!(f, "{:e} {:e} {:e}\n", bar.x, bar.width, bar.height)?;
        }
        Ok(())
    }
}

impl Display for RiemannGraph {
    /// Display the curve in a tabular form: each point is written as
    /// "x y" on a single line (in scientific notation).  This format
    /// is compatible with Gnuplot.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        for &[x, y] in self.curve() {
            write!(f, "{:e} {:e}\n", x, y)?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////
//
// Tests

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rand::prelude::*;
    use crate::{Edge, Error, RiemannGraph};

    fn xy_of_curve(g: &RiemannGraph) -> Vec<(f64, f64)> {
        g.curve().iter().map(|p| (p[0], p[1])).collect()
    }

    #[test]
    fn curve_linear() {
        let g = RiemannGraph::fun(|x| 3. * x + 4., 0., 5.).n(6)
            .build().unwrap();
        assert_eq!(xy_of_curve(&g),
                   vec![(0., 4.), (1., 7.), (2., 10.),
                        (3., 13.), (4., 16.), (5., 19.)]);
        assert!(g.bars().is_empty());
        assert_eq!(g.area(), None);
    }

    #[test]
    fn curve_hits_both_endpoints() {
        let g = RiemannGraph::fun(|x| x.sin(), 0.1, 0.9).n(37)
            .build().unwrap();
        let curve = g.curve();
        assert_eq!(curve.len(), 37);
        assert_eq!(curve[0][0], 0.1);
        assert_eq!(curve[36][0], 0.9);
        for w in curve.windows(2) {
            assert!(w[0][0] < w[1][0]);
        }
    }

    #[test]
    fn bars_left_linear() {
        let g = RiemannGraph::fun(|x| 3. * x + 4., 0., 5.)
            .bars(0., 5., 5).build().unwrap();
        let anchors: Vec<f64> = g.bars().iter().map(|b| b.x).collect();
        let heights: Vec<f64> = g.bars().iter().map(|b| b.height).collect();
        assert_eq!(anchors, vec![0., 1., 2., 3., 4.]);
        assert_eq!(heights, vec![4., 7., 10., 13., 16.]);
        assert!(g.bars().iter().all(|b| b.width == 1.));
        assert_eq!(g.area(), Some(50.));
        let by_bar: f64 = g.bars().iter().map(|b| b.area()).sum();
        assert_eq!(by_bar, 50.);
    }

    #[test]
    fn bars_right_linear() {
        let g = RiemannGraph::fun(|x| 3. * x + 4., 0., 5.)
            .bars(0., 5., 5).edge(Edge::Right).build().unwrap();
        let anchors: Vec<f64> = g.bars().iter().map(|b| b.x).collect();
        let heights: Vec<f64> = g.bars().iter().map(|b| b.height).collect();
        assert_eq!(anchors, vec![1., 2., 3., 4., 5.]);
        assert_eq!(heights, vec![7., 10., 13., 16., 19.]);
        // Signed width grows the drawn bar leftward from its anchor.
        assert!(g.bars().iter().all(|b| b.width == -1.));
        assert_eq!(g.area(), Some(65.));
    }

    #[test]
    fn bars_interval_independent_of_domain() {
        // Bars on a range disjoint from the graphed one.
        let g = RiemannGraph::fun(|x| x * x, 0., 5.)
            .bars(10., 12., 4).build().unwrap();
        assert_eq!(g.bars().len(), 4);
        assert_eq!(g.bars()[0].x, 10.);
        assert_relative_eq!(g.bars()[3].x, 11.5);
    }

    #[test]
    fn constant_area_both_edges() {
        for &count in &[1, 7, 100] {
            for &edge in &[Edge::Left, Edge::Right] {
                let g = RiemannGraph::fun(|_| 2.5, -1., 3.)
                    .bars(-1., 3., count).edge(edge).build().unwrap();
                assert_eq!(g.bars().len(), count);
                assert_relative_eq!(g.area().unwrap(), 2.5 * 4.,
                                    max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn negative_heights_sum_negatively() {
        // Signed area: below the axis the terms are negative.
        let g = RiemannGraph::fun(|_| -1.5, 0., 2.)
            .bars(0., 2., 8).build().unwrap();
        assert_relative_eq!(g.area().unwrap(), -3., max_relative = 1e-12);
    }

    #[test]
    fn bar_count_and_width_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let a = rng.gen_range(-100. ..100.);
            let b = a + rng.gen_range(0.1..50.);
            let count = rng.gen_range(1..=40);
            let edge = if rng.gen() { Edge::Left } else { Edge::Right };
            let g = RiemannGraph::fun(|x| x.cos(), a, b)
                .bars(a, b, count).edge(edge).build().unwrap();
            assert_eq!(g.bars().len(), count);
            for bar in g.bars() {
                assert_relative_eq!(bar.width.abs(), (b - a) / count as f64,
                                    max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn riemann_convergence_monotonic() {
        // For monotone f, the left and right sums bracket the
        // integral and their gap is (f(b) - f(a)) · (b - a) / count.
        let exact = 1. / 3.; // ∫₀¹ x² dx
        let mut prev_gap = f64::INFINITY;
        for &count in &[4, 16, 64, 256] {
            let left = RiemannGraph::fun(|x| x * x, 0., 1.)
                .bars(0., 1., count).build().unwrap()
                .area().unwrap();
            let right = RiemannGraph::fun(|x| x * x, 0., 1.)
                .bars(0., 1., count).edge(Edge::Right).build().unwrap()
                .area().unwrap();
            assert!(left < exact && exact < right);
            let gap = right - left;
            assert_relative_eq!(gap, 1. / count as f64, max_relative = 1e-9);
            assert!(gap < prev_gap);
            prev_gap = gap;
        }
    }

    #[test]
    fn derived_bounds_pad_the_range() {
        // Range [4, 19] padded by 20% of 15 on each side.
        let g = RiemannGraph::fun(|x| 3. * x + 4., 0., 5.).n(6)
            .build().unwrap();
        let vp = g.viewport();
        assert_relative_eq!(vp.ymin, 1., max_relative = 1e-12);
        assert_relative_eq!(vp.ymax, 22., max_relative = 1e-12);
        assert!(g.zero_line());
    }

    #[test]
    fn derived_bounds_flat_for_constant() {
        let g = RiemannGraph::fun(|_| 2., 0., 5.).build().unwrap();
        let vp = g.viewport();
        assert_eq!(vp.ymin, 2.);
        assert_eq!(vp.ymax, 2.);
        assert!(vp.is_empty());
        assert!(g.zero_line());
    }

    #[test]
    fn explicit_ylim_wins() {
        let g = RiemannGraph::fun(|x| x, 0., 1.).ylim(0., 10.)
            .build().unwrap();
        assert_eq!(g.viewport().ymin, 0.);
        assert_eq!(g.viewport().ymax, 10.);
        // The lower bound sits on the axis: no zero line to draw.
        assert!(!g.zero_line());
    }

    #[test]
    fn labels_default_and_override() {
        let g = RiemannGraph::fun(|x| x, 0., 1.).build().unwrap();
        assert_eq!(g.x_label(), "x");
        assert_eq!(g.y_label(), "y");
        let g = RiemannGraph::fun(|x| x, 0., 1.)
            .xlabel("t").ylabel("v(t)").build().unwrap();
        assert_eq!(g.x_label(), "t");
        assert_eq!(g.y_label(), "v(t)");
    }

    #[test]
    fn invalid_inputs() {
        assert_eq!(RiemannGraph::fun(|x| x, 0., 1.).n(1).build().err(),
                   Some(Error::TooFewSamples(1)));
        assert_eq!(RiemannGraph::fun(|x| x, 5., 0.).build().err(),
                   Some(Error::EmptyInterval(5., 0.)));
        assert!(matches!(RiemannGraph::fun(|x| x, 0., f64::NAN).build(),
                         Err(Error::EmptyInterval(..))));
        assert_eq!(RiemannGraph::fun(|x| x, 0., 1.).bars(0., 1., 0)
                   .build().err(),
                   Some(Error::NoBars));
        assert_eq!(RiemannGraph::fun(|x| x, 0., 1.).bars(1., 1., 3)
                   .build().err(),
                   Some(Error::EmptyInterval(1., 1.)));
    }

    #[test]
    fn non_finite_function_value() {
        // 1/x blows up at the middle sample point x = 0.
        let err = RiemannGraph::fun(|x| 1. / x, -1., 1.).n(3).build().err();
        assert_eq!(err, Some(Error::NotFinite { x: 0. }));
        let err = RiemannGraph::fun(|x| x.sqrt(), 1., 2.)
            .bars(-4., -2., 2).build().err();
        assert!(matches!(err, Some(Error::NotFinite { .. })));
    }

    #[test]
    fn tabular_output() {
        let g = RiemannGraph::fun(|x| x, 0., 1.).n(3)
            .bars(0., 1., 2).build().unwrap();
        let mut out = Vec::new();
        g.write(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(),
                   "0e0 0e0\n5e-1 5e-1\n1e0 1e0\n");
        let mut out = Vec::new();
        g.write_bars(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(),
                   "0e0 5e-1 0e0\n5e-1 5e-1 5e-1\n");
        assert_eq!(format!("{}", g), "0e0 0e0\n5e-1 5e-1\n1e0 1e0\n");
    }

    #[test]
    fn latex_output() {
        let g = RiemannGraph::fun(|x| x + 1., 0., 1.).n(2)
            .bars(0., 1., 3).build().unwrap();
        let mut out = Vec::new();
        g.latex().write(&mut out).unwrap();
        let tex = String::from_utf8(out).unwrap();
        assert!(tex.starts_with("% Written by the Rust riemann_sum crate.\n\
                                 \\begin{pgfscope}\n"));
        assert!(tex.ends_with("\\end{pgfscope}\n"));
        assert_eq!(tex.matches("\\pgfpathrectanglecorners").count(), 3);
        assert_eq!(tex.matches("\\pgfsetdash").count(), 1);
        assert!(tex.contains("\\pgfsetfillopacity{0.2}"));
    }
}
