//! Rotating 3D starfields projected onto the terminal.
//!
//! Two point clouds are sampled once per activation and never modified;
//! only their rotation angles advance each frame.

use std::f32::consts::FRAC_PI_4;

use folio_core::Rgba;
use rand::Rng;

/// Points in the large pink cloud.
pub const DENSE_COUNT: usize = 1500;
/// Half-width of the large cloud's cube.
pub const DENSE_HALF_WIDTH: f32 = 10.0;
/// Points in the small white cloud.
pub const SPARSE_COUNT: usize = 1000;
/// Half-width of the small cloud's cube.
pub const SPARSE_HALF_WIDTH: f32 = 5.0;

const CAMERA_Z: f32 = 2.0;
const FOV_Y_DEGREES: f32 = 75.0;
const NEAR: f32 = 0.1;
const FAR: f32 = 1000.0;

/// Immutable flat `[x0, y0, z0, x1, y1, z1, ...]` coordinate buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct StarBuffer {
    positions: Box<[f32]>,
}

impl StarBuffer {
    /// Sample `count` points uniformly in the cube `[-half_width, half_width)^3`.
    pub fn cube<R: Rng + ?Sized>(count: usize, half_width: f32, rng: &mut R) -> Self {
        let positions = (0..count * 3)
            .map(|_| rng.gen_range(-half_width..half_width))
            .collect();
        Self { positions }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The raw coordinates.
    pub fn as_slice(&self) -> &[f32] {
        &self.positions
    }

    /// Iterate over points as `[x, y, z]`.
    pub fn points(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
        self.positions.chunks_exact(3).map(|c| [c[0], c[1], c[2]])
    }
}

/// Euler angles in radians, applied in XYZ order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rotation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Rotation {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Rotate a point: z first, then y, then x.
    pub fn apply(&self, [x, y, z]: [f32; 3]) -> [f32; 3] {
        let (sz, cz) = self.z.sin_cos();
        let (x, y) = (x * cz - y * sz, x * sz + y * cz);

        let (sy, cy) = self.y.sin_cos();
        let (x, z) = (x * cy + z * sy, -x * sy + z * cy);

        let (sx, cx) = self.x.sin_cos();
        let (y, z) = (y * cx - z * sx, y * sx + z * cx);

        [x, y, z]
    }
}

/// Angular velocity in radians per second about each axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpinRate {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// One point cloud with its rotation state.
#[derive(Debug, Clone)]
pub struct StarLayer {
    buffer: StarBuffer,
    rotation: Rotation,
    rate: SpinRate,
    /// Fixed rotation of the enclosing group.
    tilt: Rotation,
    color: Rgba,
}

impl StarLayer {
    pub fn new(buffer: StarBuffer, rate: SpinRate, tilt: Rotation, color: Rgba) -> Self {
        Self {
            buffer,
            rotation: Rotation::default(),
            rate,
            tilt,
            color,
        }
    }

    pub fn buffer(&self) -> &StarBuffer {
        &self.buffer
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn rate(&self) -> SpinRate {
        self.rate
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Advance the rotation by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.rotation.x += self.rate.x * dt;
        self.rotation.y += self.rate.y * dt;
        self.rotation.z += self.rate.z * dt;
    }

    /// World-space points after the layer's rotation and group tilt.
    pub fn world_points(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
        self.buffer
            .points()
            .map(|p| self.tilt.apply(self.rotation.apply(p)))
    }
}

/// A star projected onto the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedStar {
    /// Normalized device x, -1 (left) to 1 (right).
    pub ndc_x: f32,
    /// Normalized device y, -1 (bottom) to 1 (top).
    pub ndc_y: f32,
    /// Distance in front of the camera.
    pub depth: f32,
}

/// Project a world point through the fixed camera at `(0, 0, 2)` looking
/// down `-z`. Returns `None` outside the view frustum.
pub fn project([x, y, z]: [f32; 3], aspect: f32) -> Option<ProjectedStar> {
    let depth = CAMERA_Z - z;
    if !(NEAR..FAR).contains(&depth) {
        return None;
    }
    let focal = 1.0 / (FOV_Y_DEGREES.to_radians() / 2.0).tan();
    let ndc_x = x / depth * focal / aspect;
    let ndc_y = y / depth * focal;
    if ndc_x.abs() > 1.0 || ndc_y.abs() > 1.0 {
        return None;
    }
    Some(ProjectedStar {
        ndc_x,
        ndc_y,
        depth,
    })
}

/// Both starfields of the space background.
#[derive(Debug, Clone)]
pub struct Starfield {
    /// Large pink cloud, tilted and tumbling slowly.
    pub dense: StarLayer,
    /// Small white cloud spinning about y.
    pub sparse: StarLayer,
}

impl Starfield {
    /// Sample fresh point clouds.
    pub fn activate() -> Self {
        let mut rng = rand::thread_rng();
        let field = Self::with_rng(&mut rng);
        tracing::debug!(
            dense = field.dense.buffer.len(),
            sparse = field.sparse.buffer.len(),
            "starfield activated"
        );
        field
    }

    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let dense = StarLayer::new(
            StarBuffer::cube(DENSE_COUNT, DENSE_HALF_WIDTH, rng),
            SpinRate {
                x: -1.0 / 50.0,
                y: -1.0 / 35.0,
                z: 0.0,
            },
            Rotation::new(0.0, 0.0, FRAC_PI_4),
            Rgba::opaque(242, 114, 200),
        );
        let sparse = StarLayer::new(
            StarBuffer::cube(SPARSE_COUNT, SPARSE_HALF_WIDTH, rng),
            SpinRate {
                x: 0.0,
                y: 1.0 / 20.0,
                z: 0.0,
            },
            Rotation::default(),
            Rgba::opaque(255, 255, 255),
        );
        Self { dense, sparse }
    }

    /// Advance both rotations by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.dense.advance(dt);
        self.sparse.advance(dt);
    }

    pub fn layers(&self) -> [&StarLayer; 2] {
        [&self.dense, &self.sparse]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_cube(buffer: &StarBuffer, count: usize, half: f32) {
        assert_eq!(buffer.len(), count);
        assert_eq!(buffer.as_slice().len(), count * 3);
        assert!(
            buffer.as_slice().iter().all(|v| (-half..half).contains(v)),
            "coordinate outside [-{half}, {half})"
        );
    }

    #[test]
    fn test_buffer_sizes_and_bounds() {
        let field = Starfield::activate();
        assert_cube(field.dense.buffer(), 1500, 10.0);
        assert_cube(field.sparse.buffer(), 1000, 5.0);
    }

    #[test]
    fn test_rates() {
        let field = Starfield::activate();
        assert_eq!(field.dense.rate().x, -1.0 / 50.0);
        assert_eq!(field.dense.rate().y, -1.0 / 35.0);
        assert_eq!(field.sparse.rate().y, 1.0 / 20.0);
        assert_eq!(field.sparse.rate().x, 0.0);
    }

    #[test]
    fn test_advance_leaves_buffer_untouched() {
        let mut field = Starfield::activate();
        let before = field.dense.buffer().clone();
        field.advance(3.0);
        assert_eq!(field.dense.buffer(), &before);
        assert!((field.dense.rotation().x - (-3.0 / 50.0)).abs() < 1e-6);
        assert!((field.sparse.rotation().y - 3.0 / 20.0).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_rotation_is_additive(
            start in -10.0f32..10.0,
            dt in 0.0f32..5.0,
            rate in -1.0f32..1.0,
        ) {
            let empty = StarBuffer { positions: Vec::new().into_boxed_slice() };
            let full = StarBuffer::cube(10, 1.0, &mut rand::thread_rng());
            let rate = SpinRate { x: rate, y: rate * 2.0, z: 0.0 };

            let mut a = StarLayer::new(empty, rate, Rotation::default(), Rgba::opaque(0, 0, 0));
            let mut b = StarLayer::new(full, rate, Rotation::default(), Rgba::opaque(0, 0, 0));
            a.rotation = Rotation::new(start, start, 0.0);
            b.rotation = Rotation::new(start, start, 0.0);
            a.advance(dt);
            b.advance(dt);

            prop_assert!((a.rotation().x - (start + rate.x * dt)).abs() < 1e-4);
            prop_assert!((a.rotation().y - (start + rate.y * dt)).abs() < 1e-4);
            prop_assert_eq!(a.rotation(), b.rotation());
        }
    }

    #[test]
    fn test_rotation_apply() {
        let quarter = std::f32::consts::FRAC_PI_2;
        let [x, y, z] = Rotation::new(0.0, 0.0, quarter).apply([1.0, 0.0, 0.0]);
        assert!(x.abs() < 1e-6 && (y - 1.0).abs() < 1e-6 && z.abs() < 1e-6);

        let [x, y, z] = Rotation::new(0.0, quarter, 0.0).apply([1.0, 0.0, 0.0]);
        assert!(x.abs() < 1e-6 && y.abs() < 1e-6 && (z + 1.0).abs() < 1e-6);

        let [x, y, z] = Rotation::new(quarter, 0.0, 0.0).apply([0.0, 1.0, 0.0]);
        assert!(x.abs() < 1e-6 && y.abs() < 1e-6 && (z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_project() {
        let centre = project([0.0, 0.0, 0.0], 1.0).unwrap();
        assert_eq!((centre.ndc_x, centre.ndc_y), (0.0, 0.0));
        assert_eq!(centre.depth, 2.0);

        // Behind the camera.
        assert_eq!(project([0.0, 0.0, 3.0], 1.0), None);
        // Far off to the side.
        assert_eq!(project([50.0, 0.0, 0.0], 1.0), None);

        let up = project([0.0, 1.0, 0.0], 1.0).unwrap();
        assert!(up.ndc_y > 0.0);
    }
}
