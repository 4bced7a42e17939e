//! 3x3 matrix type for the linear filter operators.
//!
//! [`Mat3`] backs hue-rotate, grayscale, sepia and saturate. Each of those
//! is a fixed linear transform of (r, g, b) built from luminance weights and
//! a blend or rotation factor.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column vectors**:
//!
//! ```text
//! | m00 m01 m02 |   | r |   | m00*r + m01*g + m02*b |
//! | m10 m11 m12 | * | g | = | m10*r + m11*g + m12*b |
//! | m20 m21 m22 |   | b |   | m20*r + m21*g + m22*b |
//! ```
//!
//! # Usage
//!
//! ```rust
//! use tint_core::Mat3;
//!
//! let m = Mat3::saturate(1.0);
//! let rgb = m.transform([10.0, 20.0, 30.0]);
//! assert!((rgb[1] - 20.0).abs() < 1e-9);
//! ```

/// Luminance weights used by the hue-rotate and saturate matrices.
pub const FILTER_LUMA: [f64; 3] = [0.213, 0.715, 0.072];

/// Rec.709 luminance weights used by the grayscale matrix.
pub const REC709_LUMA: [f64; 3] = [0.2126, 0.7152, 0.0722];

// Sine terms of the hue rotation, one row per output channel.
const HUE_SIN: [[f64; 3]; 3] = [
    [-0.213, -0.715, 0.928],
    [0.143, 0.14, -0.283],
    [-0.787, 0.715, 0.072],
];

/// A 3x3 matrix for color transformations.
///
/// Stored in row-major order. Use [`Mat3::from_rows`] to construct from
/// component arrays.
///
/// # Example
///
/// ```rust
/// use tint_core::Mat3;
///
/// let v = [1.0, 2.0, 3.0];
/// assert_eq!(Mat3::IDENTITY.transform(v), v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    /// Matrix elements in row-major order: [row0, row1, row2]
    pub m: [[f64; 3]; 3],
}

impl Mat3 {
    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ],
    };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Builds `m[i][j] = f(i, j)`.
    #[inline]
    fn from_fn(f: impl Fn(usize, usize) -> f64) -> Self {
        Self::from_rows([0, 1, 2].map(|i| [0, 1, 2].map(|j| f(i, j))))
    }

    /// Blend between the all-luma matrix (`t = 0`) and identity (`t = 1`).
    ///
    /// `m[i][j] = luma[j] + (delta_ij - luma[j]) * t`
    fn luma_blend(luma: [f64; 3], t: f64) -> Self {
        Self::from_fn(|i, j| luma[j] + (Self::IDENTITY.m[i][j] - luma[j]) * t)
    }

    /// Hue rotation by `degrees`.
    ///
    /// Rotates around the luminance axis defined by [`FILTER_LUMA`], the
    /// same matrix browsers use for `hue-rotate()`.
    pub fn hue_rotate(degrees: f64) -> Self {
        let angle = degrees / 180.0 * std::f64::consts::PI;
        let sin = angle.sin();
        let cos = angle.cos();
        let luma = FILTER_LUMA;

        Self::from_fn(|i, j| {
            luma[j] + cos * (Self::IDENTITY.m[i][j] - luma[j]) + sin * HUE_SIN[i][j]
        })
    }

    /// Grayscale blend. `1.0` is fully gray, `0.0` is identity.
    pub fn grayscale(value: f64) -> Self {
        Self::luma_blend(REC709_LUMA, 1.0 - value)
    }

    /// Sepia blend. `1.0` is full sepia, `0.0` is identity.
    pub fn sepia(value: f64) -> Self {
        let t = 1.0 - value;
        Self::from_rows([
            [0.393 + 0.607 * t, 0.769 - 0.769 * t, 0.189 - 0.189 * t],
            [0.349 - 0.349 * t, 0.686 + 0.314 * t, 0.168 - 0.168 * t],
            [0.272 - 0.272 * t, 0.534 - 0.534 * t, 0.131 + 0.869 * t],
        ])
    }

    /// Saturation. `1.0` is identity, `0.0` desaturates fully, values
    /// above `1.0` oversaturate.
    pub fn saturate(value: f64) -> Self {
        Self::luma_blend(FILTER_LUMA, value)
    }

    /// Transforms an `[r, g, b]` triple by this matrix.
    ///
    /// No clamping happens here; callers clamp the result.
    #[inline]
    pub fn transform(&self, v: [f64; 3]) -> [f64; 3] {
        [
            self.m[0][0] * v[0] + self.m[0][1] * v[1] + self.m[0][2] * v[2],
            self.m[1][0] * v[0] + self.m[1][1] * v[1] + self.m[1][2] * v[2],
            self.m[2][0] * v[0] + self.m[2][1] * v[1] + self.m[2][2] * v[2],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_mat_eq(a: &Mat3, b: &Mat3) {
        for i in 0..3 {
            for j in 0..3 {
                assert_abs_diff_eq!(a.m[i][j], b.m[i][j], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_mat3_identity() {
        let v = [1.0, 2.0, 3.0];
        assert_eq!(Mat3::IDENTITY.transform(v), v);
    }

    #[test]
    fn test_neutral_filter_matrices() {
        assert_mat_eq(&Mat3::hue_rotate(0.0), &Mat3::IDENTITY);
        assert_mat_eq(&Mat3::hue_rotate(360.0), &Mat3::IDENTITY);
        assert_mat_eq(&Mat3::saturate(1.0), &Mat3::IDENTITY);
        assert_mat_eq(&Mat3::sepia(0.0), &Mat3::IDENTITY);
        assert_mat_eq(&Mat3::grayscale(0.0), &Mat3::IDENTITY);
    }

    #[test]
    fn test_desaturate_rows_are_luma() {
        let m = Mat3::saturate(0.0);
        for row in 0..3 {
            assert_eq!(m.m[row], FILTER_LUMA);
        }
        let g = Mat3::grayscale(1.0);
        for row in 0..3 {
            assert_eq!(g.m[row], REC709_LUMA);
        }
    }

    #[test]
    fn test_hue_rotate_preserves_gray() {
        // Gray lies on the rotation axis.
        let m = Mat3::hue_rotate(123.0);
        let out = m.transform([100.0, 100.0, 100.0]);
        for c in out {
            assert_abs_diff_eq!(c, 100.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_filter_coefficients() {
        let sat = Mat3::saturate(2.0);
        assert_mat_eq(
            &sat,
            &Mat3::from_rows([
                [1.787, -0.715, -0.072],
                [-0.213, 1.285, -0.072],
                [-0.213, -0.715, 1.928],
            ]),
        );

        let sepia = Mat3::sepia(1.0);
        assert_mat_eq(
            &sepia,
            &Mat3::from_rows([
                [0.393, 0.769, 0.189],
                [0.349, 0.686, 0.168],
                [0.272, 0.534, 0.131],
            ]),
        );

        // cos = 0, sin = 1
        let hue = Mat3::hue_rotate(90.0);
        assert_mat_eq(
            &hue,
            &Mat3::from_rows([
                [0.0, 0.0, 1.0],
                [0.356, 0.855, -0.211],
                [-0.574, 1.43, 0.144],
            ]),
        );

        // cos = -1, sin = 0
        let half = Mat3::hue_rotate(180.0);
        assert_mat_eq(
            &half,
            &Mat3::from_rows([
                [-0.574, 1.43, 0.144],
                [0.426, 0.43, 0.144],
                [0.426, 1.43, -0.856],
            ]),
        );

        let gray = Mat3::grayscale(0.5);
        assert_mat_eq(
            &gray,
            &Mat3::from_rows([
                [0.6063, 0.3576, 0.0361],
                [0.1063, 0.8576, 0.0361],
                [0.1063, 0.3576, 0.5361],
            ]),
        );
    }
}
