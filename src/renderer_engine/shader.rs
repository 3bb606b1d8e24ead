use anyhow::{anyhow, bail, Context};
use gl::types::*;
use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;
use std::{ffi::CString, path::Path, ptr};

lazy_static! {
    /// "0:12(105): ..." (Mesa / Intel)
    static ref RE_MESA: Regex = Regex::new(r"(\d+):(\d+)\((\d+)\)").expect("valid regex");
    /// "0(12) : error ..." (NVIDIA)
    static ref RE_NVIDIA: Regex = Regex::new(r"(\d+)\((\d+)\)\s*:").expect("valid regex");
    /// "ERROR: 0:12: ..." (AMD)
    static ref RE_AMD: Regex = Regex::new(r":\s*(\d+):(\d+):").expect("valid regex");
}

/// Source GLSL d'un programme : fichiers sur disque + version embarquée.
#[derive(Debug, Clone, Copy)]
pub struct ShaderSources {
    pub name: &'static str,
    pub vertex_path: &'static str,
    pub fragment_path: &'static str,
    pub vertex_fallback: &'static str,
    pub fragment_fallback: &'static str,
}

impl ShaderSources {
    /// Lit les sources depuis le disque ; la version embarquée est utilisée
    /// pour tout fichier illisible.
    pub fn load(&self) -> (String, String) {
        (
            read_or_fallback(self.vertex_path, self.vertex_fallback),
            read_or_fallback(self.fragment_path, self.fragment_fallback),
        )
    }
}

fn read_or_fallback(path: &str, fallback: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(src) => src,
        Err(e) => {
            debug!("Shader '{}' not readable ({}), using embedded source", path, e);
            fallback.to_string()
        }
    }
}

/// Compile un programme à partir de fichiers GLSL.
///
/// # Safety
/// Nécessite un contexte OpenGL courant.
pub unsafe fn try_compile_shader_program_from_files<P: AsRef<Path>>(
    vertex_path: P,
    fragment_path: P,
) -> anyhow::Result<u32> {
    let vertex_path = vertex_path.as_ref();
    let fragment_path = fragment_path.as_ref();
    let vertex_src = std::fs::read_to_string(vertex_path)
        .with_context(|| format!("Failed to load vertex shader '{}'", vertex_path.display()))?;
    let fragment_src = std::fs::read_to_string(fragment_path).with_context(|| {
        format!(
            "Failed to load fragment shader '{}'",
            fragment_path.display()
        )
    })?;
    try_compile_shader_program(&vertex_src, &fragment_src)
}

/// Compile et lie un programme shader.
///
/// # Safety
/// Nécessite un contexte OpenGL courant.
pub unsafe fn try_compile_shader_program(
    vertex_src: &str,
    fragment_src: &str,
) -> anyhow::Result<u32> {
    let vs = try_compile_shader(vertex_src, gl::VERTEX_SHADER)?;
    let fs = match try_compile_shader(fragment_src, gl::FRAGMENT_SHADER) {
        Ok(fs) => fs,
        Err(e) => {
            gl::DeleteShader(vs);
            return Err(e);
        }
    };

    let program = gl::CreateProgram();
    gl::AttachShader(program, vs);
    gl::AttachShader(program, fs);
    gl::LinkProgram(program);
    gl::DeleteShader(vs);
    gl::DeleteShader(fs);

    let mut success = gl::FALSE as GLint;
    gl::GetProgramiv(program, gl::LINK_STATUS, &mut success);
    if success != gl::TRUE as GLint {
        let mut len = 0;
        gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);
        let mut buf = vec![0u8; len.max(0) as usize];
        gl::GetProgramInfoLog(program, len, ptr::null_mut(), buf.as_mut_ptr() as *mut _);
        gl::DeleteProgram(program);
        bail!("Shader link failed:\n{}", String::from_utf8_lossy(&buf));
    }
    Ok(program)
}

unsafe fn try_compile_shader(src: &str, ty: GLenum) -> anyhow::Result<u32> {
    let c_str = CString::new(src).map_err(|e| anyhow!("CString error: {}", e))?;
    let shader = gl::CreateShader(ty);
    gl::ShaderSource(shader, 1, &c_str.as_ptr(), ptr::null());
    gl::CompileShader(shader);

    let mut success = gl::FALSE as GLint;
    gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut success);
    if success == gl::TRUE as GLint {
        return Ok(shader);
    }

    let mut len = 0;
    gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
    let mut buf = vec![0u8; len.max(0) as usize];
    gl::GetShaderInfoLog(shader, len, ptr::null_mut(), buf.as_mut_ptr() as *mut _);
    gl::DeleteShader(shader);

    let log_cow = String::from_utf8_lossy(&buf);
    let log = log_cow.trim_matches(char::from(0));
    let mut message = format!("Shader compilation failed:\n{}", log);
    match parse_glsl_error_line(log) {
        Some(line) => message.push_str(&format_glsl_error_context(src, line)),
        None => warn!("Could not locate GLSL error line in log: {:?}", log),
    }
    Err(anyhow!(message))
}

/// Numéro de ligne d'une erreur GLSL, quel que soit le pilote.
pub fn parse_glsl_error_line(log: &str) -> Option<usize> {
    [&*RE_MESA, &*RE_NVIDIA, &*RE_AMD].iter().find_map(|re| {
        re.captures(log)
            .and_then(|cap| cap.get(2))
            .and_then(|m| m.as_str().parse::<usize>().ok())
    })
}

/// Extrait du source GLSL autour de la ligne fautive.
pub fn format_glsl_error_context(src: &str, line_number: usize) -> String {
    const CONTEXT_LINES: usize = 2;

    let lines: Vec<&str> = src.lines().collect();
    if lines.is_empty() || line_number == 0 {
        return String::new();
    }

    let mut output = format!("\n🔍 Error context (line {}):\n", line_number);
    let start = line_number.saturating_sub(1 + CONTEXT_LINES).min(lines.len());
    let end = (line_number + CONTEXT_LINES).min(lines.len());

    for (offset, line) in lines[start..end].iter().enumerate() {
        let current = start + offset + 1;
        if current == line_number {
            output.push_str(&format!("> {:>3} | {}\n", current, line));
            output.push_str(&format!("        {}\n", "^".repeat(line.len().min(80))));
        } else {
            output.push_str(&format!("  {:>3} | {}\n", current, line));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_glsl_error_line_per_vendor() {
        assert_eq!(
            parse_glsl_error_line("0:12(105): error: undefined variable"),
            Some(12)
        );
        assert_eq!(
            parse_glsl_error_line("0(7) : error C1000: undefined variable"),
            Some(7)
        );
        assert_eq!(
            parse_glsl_error_line("ERROR: 0:31: 'u_mous' : undeclared identifier"),
            Some(31)
        );
        assert_eq!(parse_glsl_error_line("Error: no line info"), None);
        assert_eq!(parse_glsl_error_line(""), None);
    }

    #[test]
    fn test_parse_glsl_error_line_with_trailing_nul() {
        let log = "0:10(2): error: 'fbm' undeclared\0";
        assert_eq!(parse_glsl_error_line(log), Some(10));
    }

    #[test]
    fn test_format_glsl_error_context() {
        let src = "#version 330 core\nuniform float u_time;\nvoid main() {\n  oops\n}";
        let out = format_glsl_error_context(src, 4);
        assert!(out.contains("Error context (line 4)"));
        assert!(out.contains(">   4 |   oops"));
        assert!(out.contains("    2 | uniform float u_time;"));
    }

    #[test]
    fn test_format_glsl_error_context_out_of_range() {
        assert_eq!(format_glsl_error_context("", 1), "");
        assert_eq!(format_glsl_error_context("void main() {}", 0), "");
        let out = format_glsl_error_context("a\nb", 100);
        assert!(!out.contains('>'));
    }

    #[test]
    fn test_missing_files_fall_back_to_embedded_sources() {
        let sources = ShaderSources {
            name: "test",
            vertex_path: "does/not/exist.vert",
            fragment_path: "does/not/exist.frag",
            vertex_fallback: "VERT",
            fragment_fallback: "FRAG",
        };
        assert_eq!(sources.load(), ("VERT".to_string(), "FRAG".to_string()));
    }
}
