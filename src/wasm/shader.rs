//! GLSL ES 3.00 sources for the mist background. `crate::field` is the CPU
//! twin of `FRAGMENT_SHADER`; keep them in step.

/// Full-screen triangle from `gl_VertexID`, no vertex buffers.
pub const VERTEX_SHADER: &str = r#"#version 300 es
out vec2 vUv;

void main() {
    vec2 pos = vec2(float((gl_VertexID << 1) & 2), float(gl_VertexID & 2));
    vUv = pos;
    gl_Position = vec4(pos * 2.0 - 1.0, 0.0, 1.0);
}
"#;

pub const FRAGMENT_SHADER: &str = r#"#version 300 es
precision highp float;

uniform float uTime;
uniform vec2 uResolution;
in vec2 vUv;
out vec4 outColor;

vec3 permute(vec3 x) { return mod(((x * 34.0) + 1.0) * x, 289.0); }

float snoise(vec2 v) {
    const vec4 C = vec4(0.211324865405187, 0.366025403784439,
                        -0.577350269189626, 0.024390243902439);
    vec2 i = floor(v + dot(v, C.yy));
    vec2 x0 = v - i + dot(i, C.xx);
    vec2 i1 = (x0.x > x0.y) ? vec2(1.0, 0.0) : vec2(0.0, 1.0);
    vec4 x12 = x0.xyxy + C.xxzz;
    x12.xy -= i1;
    i = mod(i, 289.0);
    vec3 p = permute(permute(i.y + vec3(0.0, i1.y, 1.0)) + i.x + vec3(0.0, i1.x, 1.0));
    vec3 m = max(0.5 - vec3(dot(x0, x0), dot(x12.xy, x12.xy), dot(x12.zw, x12.zw)), 0.0);
    m = m * m;
    m = m * m;
    vec3 x = 2.0 * fract(p * C.www) - 1.0;
    vec3 h = abs(x) - 0.5;
    vec3 ox = floor(x + 0.5);
    vec3 a0 = x - ox;
    m *= 1.79284291400159 - 0.85373472095314 * (a0 * a0 + h * h);
    vec3 g;
    g.x = a0.x * x0.x + h.x * x0.y;
    g.yz = a0.yz * x12.xz + h.yz * x12.yw;
    return 130.0 * dot(m, g);
}

float fbm(vec2 x) {
    float v = 0.0;
    float a = 0.5;
    vec2 shift = vec2(100.0);
    mat2 rot = mat2(cos(0.5), sin(0.5), -sin(0.5), cos(0.5));
    for (int i = 0; i < 5; ++i) {
        v += a * snoise(x);
        x = rot * x * 2.0 + shift;
        a *= 0.5;
    }
    return v;
}

void main() {
    vec2 st = gl_FragCoord.xy / uResolution.xy;
    st.x *= uResolution.x / uResolution.y;

    float time = uTime * 0.1;

    vec2 q = vec2(fbm(st + 0.0 * time), fbm(st + vec2(1.0)));
    vec2 r = vec2(
        fbm(st + q + vec2(1.7, 9.2) + 0.15 * time),
        fbm(st + q + vec2(8.3, 2.8) + 0.126 * time));
    float f = fbm(st + r);

    vec3 color1 = vec3(0.1, 0.08, 0.06);
    vec3 color2 = vec3(0.5, 0.4, 0.3);
    vec3 color3 = vec3(0.8, 0.7, 0.5);

    vec3 color = mix(color1, color2, clamp((f * f) * 4.0, 0.0, 1.0));
    color = mix(color, color3, clamp(length(q), 0.0, 1.0));

    float grain = fract(sin(dot(vUv, vec2(12.9898, 78.233))) * 43758.5453);
    color += grain * 0.05;

    float dist = distance(vUv, vec2(0.5));
    color *= 1.0 - dist * 0.5;

    outColor = vec4(color * 1.2, 1.0);
}
"#;
