//! Output side: hand a finished mesh to something that can show it.
//!
//! The core never calls into a host. A host implements `SceneSink`; this
//! crate ships `ObjExporter`, which writes Wavefront OBJ + MTL files.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::ExportError;
use crate::mesh::Mesh;
use crate::seed::Address;

/// Flat diffuse colour for a mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub rgb: [f32; 3],
}

impl Material {
    /// Colour from the first three octets, each scaled to 0..=1.
    pub fn from_address(address: &Address) -> Self {
        let [r, g, b, _] = address.octets();
        Material {
            rgb: [r, g, b].map(|c| c as f32 / 255.0),
        }
    }
}

/// Anything that can receive meshes and produce an output from them.
pub trait SceneSink {
    /// Register a named object.
    fn add_object(&mut self, name: &str, mesh: &Mesh, material: Material)
        -> Result<(), ExportError>;

    /// Produce the output for the named object and return where it went.
    fn render(&mut self, name: &str) -> Result<PathBuf, ExportError>;
}

/// Write the OBJ body for `mesh`. Face indices are 1-based.
pub fn write_obj<W: Write>(
    out: &mut W,
    name: &str,
    mtllib: &str,
    mesh: &Mesh,
) -> io::Result<()> {
    writeln!(out, "mtllib {mtllib}")?;
    writeln!(out, "o {name}")?;
    for [x, y, z] in &mesh.points {
        writeln!(out, "v {x} {y} {z}")?;
    }
    writeln!(out, "usemtl {name}")?;
    for [a, b, c, d] in &mesh.faces {
        writeln!(out, "f {} {} {} {}", a + 1, b + 1, c + 1, d + 1)?;
    }
    Ok(())
}

/// Write a single-material MTL body.
pub fn write_mtl<W: Write>(out: &mut W, name: &str, material: Material) -> io::Result<()> {
    let [r, g, b] = material.rgb;
    writeln!(out, "newmtl {name}")?;
    writeln!(out, "Kd {r:.6} {g:.6} {b:.6}")?;
    writeln!(out, "Ks 0 0 0")?;
    writeln!(out, "d 1")?;
    Ok(())
}

/// Writes `<name>.obj` and `<name>.mtl` into a directory.
pub struct ObjExporter {
    out_dir: PathBuf,
    objects: BTreeMap<String, (Mesh, Material)>,
}

impl ObjExporter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        ObjExporter {
            out_dir: out_dir.into(),
            objects: BTreeMap::new(),
        }
    }

    fn write_file(
        path: &Path,
        body: impl FnOnce(&mut io::BufWriter<fs::File>) -> io::Result<()>,
    ) -> Result<(), ExportError> {
        let io_err = |source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = fs::File::create(path).map_err(io_err)?;
        let mut writer = io::BufWriter::new(file);
        body(&mut writer).map_err(io_err)?;
        writer.flush().map_err(io_err)
    }
}

impl SceneSink for ObjExporter {
    fn add_object(
        &mut self,
        name: &str,
        mesh: &Mesh,
        material: Material,
    ) -> Result<(), ExportError> {
        debug!("adding {} ({} cubes)", name, mesh.cube_count());
        self.objects
            .insert(name.to_string(), (mesh.clone(), material));
        Ok(())
    }

    fn render(&mut self, name: &str) -> Result<PathBuf, ExportError> {
        let (mesh, material) = self
            .objects
            .get(name)
            .ok_or(ExportError::NothingToRender)?;

        let mtl_name = format!("{name}.mtl");
        let mtl_path = self.out_dir.join(&mtl_name);
        let obj_path = self.out_dir.join(format!("{name}.obj"));

        Self::write_file(&mtl_path, |w| write_mtl(w, name, *material))?;
        Self::write_file(&obj_path, |w| write_obj(w, name, &mtl_name, mesh))?;

        info!("wrote {}", obj_path.display());
        Ok(obj_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::create_grid;
    use crate::mesh::populate;

    /// Records calls instead of producing output.
    #[derive(Default)]
    struct FakeSink {
        added: Vec<(String, usize, Material)>,
        rendered: Vec<String>,
    }

    impl SceneSink for FakeSink {
        fn add_object(
            &mut self,
            name: &str,
            mesh: &Mesh,
            material: Material,
        ) -> Result<(), ExportError> {
            self.added
                .push((name.to_string(), mesh.cube_count(), material));
            Ok(())
        }

        fn render(&mut self, name: &str) -> Result<PathBuf, ExportError> {
            self.rendered.push(name.to_string());
            Ok(PathBuf::from(format!("//{name}")))
        }
    }

    fn single_cube() -> Mesh {
        let mut grid = create_grid(2);
        grid.set(1, 1, 1, true);
        populate(&grid)
    }

    #[test]
    fn test_material_from_address() {
        let address: Address = "255.0.51.7".parse().unwrap();
        let material = Material::from_address(&address);
        assert_eq!(material.rgb, [1.0, 0.0, 0.2]);
    }

    #[test]
    fn test_sink_receives_mesh_and_material() {
        let address: Address = "10.0.0.1".parse().unwrap();
        let mut sink = FakeSink::default();
        let name = address.to_string();

        sink.add_object(&name, &single_cube(), Material::from_address(&address))
            .unwrap();
        let out = sink.render(&name).unwrap();

        assert_eq!(sink.added.len(), 1);
        assert_eq!(sink.added[0].0, "10.0.0.1");
        assert_eq!(sink.added[0].1, 1);
        assert_eq!(sink.rendered, vec!["10.0.0.1".to_string()]);
        assert_eq!(out, PathBuf::from("//10.0.0.1"));
    }

    #[test]
    fn test_write_obj() {
        let mut out = Vec::new();
        write_obj(&mut out, "cube", "cube.mtl", &single_cube()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "mtllib cube.mtl");
        assert_eq!(lines[1], "o cube");
        assert_eq!(lines[2], "v 0.5 0.5 0.5");
        assert_eq!(lines.iter().filter(|l| l.starts_with("v ")).count(), 8);
        assert_eq!(lines[10], "usemtl cube");
        assert_eq!(lines[11], "f 1 2 3 4");
        assert_eq!(lines[16], "f 4 1 5 8");
        assert_eq!(lines.len(), 17);
    }

    #[test]
    fn test_write_mtl() {
        let mut out = Vec::new();
        write_mtl(&mut out, "m", Material { rgb: [1.0, 0.5, 0.0] }).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "newmtl m\nKd 1.000000 0.500000 0.000000\nKs 0 0 0\nd 1\n"
        );
    }

    #[test]
    fn test_render_without_object() {
        let mut exporter = ObjExporter::new(std::env::temp_dir());
        assert!(matches!(
            exporter.render("missing"),
            Err(ExportError::NothingToRender)
        ));
    }
}
