use std::f64::consts::PI;
use std::iter::zip;
use std::sync::OnceLock;

/// Number of Gauss-Legendre points used for every distance and time integral.
pub const QUADRATURE_POINTS: usize = 1000;

static DEFAULT_RULE: OnceLock<GaussLegendre> = OnceLock::new();

/// Nodes and weights of an n-point Gauss-Legendre rule on [-1, 1].
pub struct GaussLegendre {
    nodes: Vec<f64>,
    weights: Vec<f64>,
}

impl GaussLegendre {
    /// Roots of P_n by Newton iteration from the Tricomi initial guess.
    pub fn new(n: usize) -> Self {
        let mut nodes = vec![0.; n];
        let mut weights = vec![0.; n];
        let nf64 = n as f64;

        for i in 0..n.div_ceil(2) {
            let mut x = (PI * (i as f64 + 0.75) / (nf64 + 0.5)).cos();
            for _ in 0..100 {
                let (p, dp) = legendre_and_derivative(n, x);
                let dx = p / dp;
                x -= dx;
                if dx.abs() < 1e-15 {
                    break;
                }
            }
            let (_, dp) = legendre_and_derivative(n, x);
            let w = 2. / ((1. - x * x) * dp * dp);
            nodes[i] = -x;
            weights[i] = w;
            nodes[n - 1 - i] = x;
            weights[n - 1 - i] = w;
        }
        Self { nodes, weights }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Integral of `f` over the finite interval [lower, upper].
    ///
    /// Summation is sequential so repeated calls are bit-identical.
    pub fn integrate<F>(&self, f: F, lower: f64, upper: f64) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let half_width = 0.5 * (upper - lower);
        let mid = 0.5 * (upper + lower);
        let sum: f64 = zip(&self.nodes, &self.weights)
            .map(|(x, w)| w * f(mid + half_width * x))
            .sum();
        half_width * sum
    }
}

// Three term recurrence for P_n(x) and P_n'(x).
fn legendre_and_derivative(n: usize, x: f64) -> (f64, f64) {
    let (mut p0, mut p1) = (1., x);
    for k in 2..=n {
        let kf64 = k as f64;
        let p2 = ((2. * kf64 - 1.) * x * p1 - (kf64 - 1.) * p0) / kf64;
        p0 = p1;
        p1 = p2;
    }
    let deriv = n as f64 * (x * p1 - p0) / (x * x - 1.);
    (p1, deriv)
}

/// Fixed n-point Gauss-Legendre integral of `f` over `[lower, upper]`.
///
/// An infinite `upper` is mapped onto the scale factor, `z = 1/a - 1`, so
/// the integral becomes `int_0^{1/(1+lower)} f(1/a - 1) / a^2 da`. The
/// Gauss nodes never touch `a = 0`.
pub fn integrate<F>(f: F, lower: f64, upper: f64, n: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    let owned;
    let rule = if n == QUADRATURE_POINTS {
        DEFAULT_RULE.get_or_init(|| GaussLegendre::new(QUADRATURE_POINTS))
    } else {
        owned = GaussLegendre::new(n);
        &owned
    };

    if upper == f64::INFINITY {
        let a_upper = 1. / (1. + lower);
        return rule.integrate(|a: f64| f(1. / a - 1.) / (a * a), 0., a_upper);
    }
    rule.integrate(f, lower, upper)
}
