//! Fixed perspective camera

use galaxy_core::Vec3;

/// A perspective camera looking from `position` at `target`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    /// Width / height
    pub aspect: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::galaxy_view()
    }
}

impl Camera {
    /// The initial view onto the galaxy: slightly above and in front of the
    /// cloud's resting spot at x = 14.5.
    pub fn galaxy_view() -> Self {
        Self {
            position: Vec3::new(14.4996885384049, 2.3786581046481694, 10.974029820250149),
            target: Vec3::new(14.5, 0.0, 0.0),
            up: Vec3::UP,
            fov: 75.0,
            near: 0.1,
            far: 100.0,
            aspect: 16.0 / 9.0,
        }
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// View matrix (4x4, column-major)
    pub fn view_matrix(&self) -> [[f32; 4]; 4] {
        let f = (self.target - self.position).normalized();
        let s = f.cross(&self.up).normalized();
        let u = s.cross(&f);

        [
            [s.x, u.x, -f.x, 0.0],
            [s.y, u.y, -f.y, 0.0],
            [s.z, u.z, -f.z, 0.0],
            [
                -s.dot(&self.position),
                -u.dot(&self.position),
                f.dot(&self.position),
                1.0,
            ],
        ]
    }

    /// Perspective projection (4x4, column-major), depth mapped to [0, 1]
    pub fn projection_matrix(&self) -> [[f32; 4]; 4] {
        let f = 1.0 / (self.fov.to_radians() / 2.0).tan();
        let range = self.near - self.far;

        [
            [f / self.aspect, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [0.0, 0.0, self.far / range, -1.0],
            [0.0, 0.0, self.near * self.far / range, 0.0],
        ]
    }

    pub fn view_projection_matrix(&self) -> [[f32; 4]; 4] {
        mat4_mul(&self.projection_matrix(), &self.view_matrix())
    }

    /// Camera right vector (world space)
    pub fn right_vector(&self) -> [f32; 3] {
        let f = (self.target - self.position).normalized();
        f.cross(&self.up).normalized().to_array()
    }

    /// Camera up vector (world space, perpendicular to forward and right)
    pub fn up_vector(&self) -> [f32; 3] {
        let f = (self.target - self.position).normalized();
        let s = f.cross(&self.up).normalized();
        s.cross(&f).to_array()
    }

    /// World-space edge of a sprite of size 1, so sprites shrink with
    /// distance the same way size-attenuated points do
    pub fn point_scale(&self) -> f32 {
        (self.fov.to_radians() / 2.0).tan()
    }
}

fn mat4_mul(a: &[[f32; 4]; 4], b: &[[f32; 4]; 4]) -> [[f32; 4]; 4] {
    let mut result = [[0.0; 4]; 4];
    for (i, col) in result.iter_mut().enumerate() {
        for (j, cell) in col.iter_mut().enumerate() {
            *cell = (0..4).map(|k| a[k][j] * b[i][k]).sum();
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform(m: &[[f32; 4]; 4], p: Vec3) -> [f32; 4] {
        let v = [p.x, p.y, p.z, 1.0];
        let mut out = [0.0; 4];
        for (row, o) in out.iter_mut().enumerate() {
            *o = (0..4).map(|col| m[col][row] * v[col]).sum();
        }
        out
    }

    #[test]
    fn galaxy_view_pose() {
        let camera = Camera::galaxy_view();
        assert_eq!(camera.target, Vec3::new(14.5, 0.0, 0.0));
        assert_eq!(camera.fov, 75.0);
        assert_eq!(camera.near, 0.1);
        assert_eq!(camera.far, 100.0);
        assert!((camera.position.z - 10.974029820250149).abs() < 1e-5);
    }

    #[test]
    fn target_projects_to_center() {
        let camera = Camera::galaxy_view();
        let clip = transform(&camera.view_projection_matrix(), camera.target);
        assert!((clip[0] / clip[3]).abs() < 1e-4);
        assert!((clip[1] / clip[3]).abs() < 1e-4);
        let depth = clip[2] / clip[3];
        assert!(depth > 0.0 && depth < 1.0);
    }

    #[test]
    fn depth_range_is_zero_to_one() {
        let mut camera = Camera::galaxy_view();
        camera.position = Vec3::ZERO;
        camera.target = Vec3::new(0.0, 0.0, -1.0);
        let proj = camera.projection_matrix();

        let near = transform(&proj, Vec3::new(0.0, 0.0, -camera.near));
        assert!((near[2] / near[3]).abs() < 1e-5);
        let far = transform(&proj, Vec3::new(0.0, 0.0, -camera.far));
        assert!((far[2] / far[3] - 1.0).abs() < 1e-4);
    }

    #[test]
    fn basis_is_orthonormal() {
        let camera = Camera::galaxy_view();
        let r = camera.right_vector();
        let u = camera.up_vector();
        let dot: f32 = r.iter().zip(&u).map(|(a, b)| a * b).sum();
        assert!(dot.abs() < 1e-5);
        let len = |v: [f32; 3]| v.iter().map(|c| c * c).sum::<f32>().sqrt();
        assert!((len(r) - 1.0).abs() < 1e-5);
        assert!((len(u) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn aspect_ignores_zero_sizes() {
        let mut camera = Camera::galaxy_view();
        camera.set_aspect(800, 400);
        assert_eq!(camera.aspect, 2.0);
        camera.set_aspect(0, 400);
        assert_eq!(camera.aspect, 2.0);
    }
}
