//! Model file loading.
//!
//! Two binary formats are supported. The raw format is a bare concatenation
//! of fixed-size triangle records (nine little-endian `f32` vertex
//! components plus a packed `u32` color). The STL format is standard binary
//! STL; it carries no color, so every triangle defaults to white.
//! Files with an `.stl` extension go through the STL parser, everything
//! else through the raw parser.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::colors;
use crate::math::vec3::Vec3;
use crate::scene::{Scene, Triangle};

/// Size in bytes of one raw-format triangle record.
pub const RAW_RECORD_SIZE: usize = 40;

/// Binary STL: 80-byte comment header followed by a u32 triangle count.
const STL_HEADER_SIZE: usize = 84;
/// Normal plus three vertices (twelve f32) plus a 2-byte attribute field.
const STL_RECORD_SIZE: usize = 50;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read model file: {0}")]
    Io(#[from] std::io::Error),
    #[error("file size {size} is not a whole number of 40-byte triangle records")]
    MisalignedRecords { size: usize },
    #[error("file too small to hold an STL header")]
    MissingHeader,
    #[error("file holds {actual} whole triangles but declares {declared}")]
    Truncated { declared: usize, actual: usize },
}

/// Loads a model file, picking the parser from the file extension.
pub fn load_model(path: impl AsRef<Path>) -> Result<Scene, LoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let scene = match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("stl") => parse_stl(&bytes)?,
        _ => parse_raw(&bytes)?,
    };
    debug!(
        path = %path.display(),
        triangles = scene.len(),
        "model loaded"
    );
    Ok(scene)
}

/// Parses the raw record format. The byte length must be an exact multiple
/// of the record size; the triangle count is implied by it.
pub fn parse_raw(bytes: &[u8]) -> Result<Scene, LoadError> {
    if bytes.len() % RAW_RECORD_SIZE != 0 {
        return Err(LoadError::MisalignedRecords { size: bytes.len() });
    }

    let mut triangles = Vec::with_capacity(bytes.len() / RAW_RECORD_SIZE);
    for record in bytes.chunks_exact(RAW_RECORD_SIZE) {
        let a = read_vec3(record, 0);
        let b = read_vec3(record, 12);
        let c = read_vec3(record, 24);
        let color = u32::from_le_bytes([record[36], record[37], record[38], record[39]]);
        triangles.push(Triangle::new(color, a, b, c));
    }
    Ok(Scene::new(triangles))
}

/// Parses binary STL. The declared triangle count is validated against the
/// actual byte length; the per-triangle attribute field is discarded.
pub fn parse_stl(bytes: &[u8]) -> Result<Scene, LoadError> {
    if bytes.len() < STL_HEADER_SIZE {
        return Err(LoadError::MissingHeader);
    }

    let declared = u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]) as usize;
    let body = &bytes[STL_HEADER_SIZE..];
    let actual = body.len() / STL_RECORD_SIZE;
    if actual < declared {
        return Err(LoadError::Truncated { declared, actual });
    }

    let mut triangles = Vec::with_capacity(declared);
    for record in body.chunks_exact(STL_RECORD_SIZE).take(declared) {
        let normal = read_vec3(record, 0);
        let a = read_vec3(record, 12);
        let b = read_vec3(record, 24);
        let c = read_vec3(record, 36);
        triangles.push(Triangle::with_normal(colors::WHITE, a, b, c, normal));
    }
    Ok(Scene::new(triangles))
}

fn read_f32(bytes: &[u8], offset: usize) -> f32 {
    f32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

fn read_vec3(bytes: &[u8], offset: usize) -> Vec3 {
    Vec3::new(
        read_f32(bytes, offset),
        read_f32(bytes, offset + 4),
        read_f32(bytes, offset + 8),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_record(a: Vec3, b: Vec3, c: Vec3, color: u32) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(RAW_RECORD_SIZE);
        for v in [a, b, c] {
            bytes.extend_from_slice(&v.x.to_le_bytes());
            bytes.extend_from_slice(&v.y.to_le_bytes());
            bytes.extend_from_slice(&v.z.to_le_bytes());
        }
        bytes.extend_from_slice(&color.to_le_bytes());
        bytes
    }

    fn stl_file(triangles: &[(Vec3, [Vec3; 3])], declared: u32) -> Vec<u8> {
        let mut bytes = vec![0u8; 80];
        bytes.extend_from_slice(&declared.to_le_bytes());
        for (normal, vertices) in triangles {
            for v in std::iter::once(normal).chain(vertices.iter()) {
                bytes.extend_from_slice(&v.x.to_le_bytes());
                bytes.extend_from_slice(&v.y.to_le_bytes());
                bytes.extend_from_slice(&v.z.to_le_bytes());
            }
            bytes.extend_from_slice(&[0, 0]); // attribute field
        }
        bytes
    }

    #[test]
    fn raw_round_trips_vertices_and_color() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-1.0, 0.5, 0.0);
        let c = Vec3::new(0.0, -2.5, 4.0);
        let mut bytes = raw_record(a, b, c, 0xFFFF0000);
        bytes.extend(raw_record(b, c, a, 0xFFFFFFFF));

        let scene = parse_raw(&bytes).unwrap();
        assert_eq!(scene.len(), 2);
        let first = &scene.triangles()[0];
        assert_eq!(first.a, a);
        assert_eq!(first.b, b);
        assert_eq!(first.c, c);
        assert_eq!(first.color, 0xFFFF0000);
        assert_eq!(scene.triangles()[1].color, 0xFFFFFFFF);
    }

    #[test]
    fn raw_rejects_partial_records() {
        let bytes = vec![0u8; RAW_RECORD_SIZE + 1];
        assert!(matches!(
            parse_raw(&bytes),
            Err(LoadError::MisalignedRecords { size }) if size == RAW_RECORD_SIZE + 1
        ));
    }

    #[test]
    fn empty_raw_file_is_an_empty_scene() {
        assert!(parse_raw(&[]).unwrap().is_empty());
    }

    #[test]
    fn stl_reads_normal_and_defaults_to_white() {
        let normal = Vec3::new(0.0, 0.0, 1.0);
        let vertices = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        let bytes = stl_file(&[(normal, vertices)], 1);

        let scene = parse_stl(&bytes).unwrap();
        assert_eq!(scene.len(), 1);
        let t = &scene.triangles()[0];
        assert_eq!(t.normal, normal);
        assert_eq!(t.a, vertices[0]);
        assert_eq!(t.b, vertices[1]);
        assert_eq!(t.c, vertices[2]);
        assert_eq!(t.color, colors::WHITE);
    }

    #[test]
    fn stl_with_zero_triangles_is_valid() {
        let bytes = stl_file(&[], 0);
        assert!(parse_stl(&bytes).unwrap().is_empty());
    }

    #[test]
    fn stl_truncated_body_is_an_error() {
        // Declares two triangles but carries only one.
        let normal = Vec3::new(0.0, 0.0, 1.0);
        let vertices = [Vec3::ZERO, Vec3::ONE, Vec3::new(1.0, 0.0, 0.0)];
        let bytes = stl_file(&[(normal, vertices)], 2);
        assert!(matches!(
            parse_stl(&bytes),
            Err(LoadError::Truncated {
                declared: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn stl_shorter_than_header_is_an_error() {
        assert!(matches!(
            parse_stl(&[0u8; 83]),
            Err(LoadError::MissingHeader)
        ));
    }
}
