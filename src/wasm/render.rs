use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlProgram, WebGlShader,
    WebGlUniformLocation, WebGlVertexArrayObject,
};

use super::shader::{FRAGMENT_SHADER, VERTEX_SHADER};
use crate::session::{RenderState, Viewport};

/// Full-viewport mist background drawn with a single fragment shader.
pub struct Generator {
    canvas: HtmlCanvasElement,
    gl: GL,
    program: WebGlProgram,
    vao: WebGlVertexArrayObject,
    u_time: Option<WebGlUniformLocation>,
    u_resolution: Option<WebGlUniformLocation>,
}

impl Generator {
    /// Finds the drawing surface and builds the pipeline. `Ok(None)` when the
    /// page has no surface.
    pub fn attach(document: &Document, selector: &str) -> Result<Option<Self>, JsValue> {
        let Some(element) = document.query_selector(selector)? else {
            return Ok(None);
        };
        let canvas = element
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("drawing surface is not a canvas"))?;

        let gl: GL = canvas
            .get_context_with_context_options("webgl2", &context_attributes()?)?
            .ok_or("WebGL2 not supported")?
            .dyn_into()?;

        let program = link_program(&gl, VERTEX_SHADER, FRAGMENT_SHADER)?;
        let vao = gl
            .create_vertex_array()
            .ok_or("failed to create vertex array")?;
        let u_time = gl.get_uniform_location(&program, "uTime");
        let u_resolution = gl.get_uniform_location(&program, "uResolution");

        gl.disable(GL::DEPTH_TEST);
        gl.depth_mask(false);

        Ok(Some(Self {
            canvas,
            gl,
            program,
            vao,
            u_time,
            u_resolution,
        }))
    }

    /// Matches the surface to the viewport. Setting the same size twice is a
    /// no-op in effect.
    pub fn resize(&self, viewport: &Viewport, state: &RenderState) {
        self.canvas.set_width(state.width);
        self.canvas.set_height(state.height);
        let style = self.canvas.style();
        // Style failures only affect CSS sizing; the backing store is already set.
        style.set_property("width", &format!("{}px", viewport.width)).ok();
        style.set_property("height", &format!("{}px", viewport.height)).ok();
        self.gl.viewport(0, 0, state.width as i32, state.height as i32);
    }

    pub fn render(&self, state: &RenderState) {
        let gl = &self.gl;
        gl.use_program(Some(&self.program));
        gl.uniform1f(self.u_time.as_ref(), state.elapsed as f32);
        gl.uniform2f(self.u_resolution.as_ref(), state.width as f32, state.height as f32);
        gl.bind_vertex_array(Some(&self.vao));
        gl.draw_arrays(GL::TRIANGLES, 0, 3);
        gl.bind_vertex_array(None);
    }
}

fn context_attributes() -> Result<Object, JsValue> {
    let attrs = Object::new();
    Reflect::set(&attrs, &"alpha".into(), &true.into())?;
    Reflect::set(&attrs, &"antialias".into(), &false.into())?;
    Reflect::set(&attrs, &"depth".into(), &false.into())?;
    Reflect::set(&attrs, &"powerPreference".into(), &"high-performance".into())?;
    Ok(attrs)
}

fn compile_shader(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader, JsValue> {
    let shader = gl.create_shader(kind).ok_or("failed to create shader")?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let compiled = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if compiled {
        return Ok(shader);
    }
    let log = gl.get_shader_info_log(&shader).unwrap_or_default();
    gl.delete_shader(Some(&shader));
    Err(JsValue::from_str(&format!("shader compile failed: {log}")))
}

fn link_program(gl: &GL, vertex: &str, fragment: &str) -> Result<WebGlProgram, JsValue> {
    let vs = compile_shader(gl, GL::VERTEX_SHADER, vertex)?;
    let fs = compile_shader(gl, GL::FRAGMENT_SHADER, fragment)?;
    let program = gl.create_program().ok_or("failed to create program")?;
    gl.attach_shader(&program, &vs);
    gl.attach_shader(&program, &fs);
    gl.link_program(&program);

    // Shaders are owned by the program once linked.
    gl.delete_shader(Some(&vs));
    gl.delete_shader(Some(&fs));

    let linked = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if linked {
        return Ok(program);
    }
    let log = gl.get_program_info_log(&program).unwrap_or_default();
    gl.delete_program(Some(&program));
    Err(JsValue::from_str(&format!("program link failed: {log}")))
}
