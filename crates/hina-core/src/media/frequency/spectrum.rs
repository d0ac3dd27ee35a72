use num_complex::Complex;

/// The complex coefficients of one carrier channel under the forward
/// transform. Same grid dimensions as the carrier, row-major.
pub struct Plane {
    /// index of the carrier channel this plane was computed from
    pub channel: usize,
    pub data: Vec<Complex<f64>>,
    width: usize,
    height: usize,
}

impl Plane {
    pub fn new(channel: usize, data: Vec<Complex<f64>>, width: usize, height: usize) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            channel,
            data,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }
}

/// The frequency-domain representation of the selected channels of one
/// carrier: one [`Plane`] of complex coefficients per channel. The magnitude
/// component is the only thing a mask blend mutates, phase stays untouched.
pub struct Spectrum {
    pub planes: Vec<Plane>,
}

impl Spectrum {
    pub fn width(&self) -> usize {
        self.planes.first().map(Plane::width).unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.planes.first().map(Plane::height).unwrap_or(0)
    }
}
