//! The gl entry-point table and thunks. Candidate order encodes provider
//! preference: core name first, then the decorated extension variants that
//! shipped the same functionality earlier.

use std::ffi::c_void;

use crate::registry::{always, entry_points, gl, gl_ext, gles, gles1};
use crate::types::*;

entry_points! {
    target: Gl;

    // ----
    // bootstrap queries; these must resolve without capability checks, the
    // capability probe itself depends on them.

    fn glGetString(name: GLenum) -> *const GLubyte {
        "glGetString" => always(),
    }
    fn glGetIntegerv(pname: GLenum, data: *mut GLint) {
        "glGetIntegerv" => always(),
    }
    fn glGetStringi(name: GLenum, index: GLuint) -> *const GLubyte {
        "glGetStringi" => gl(3, 0),
        "glGetStringi" => gles(3, 0),
    }
    fn glGetError() -> GLenum {
        "glGetError" => gl(1, 0),
        "glGetError" => gles(1, 0),
    }
    fn glGetFloatv(pname: GLenum, data: *mut GLfloat) {
        "glGetFloatv" => gl(1, 0),
        "glGetFloatv" => gles(1, 0),
    }
    fn glGetBooleanv(pname: GLenum, data: *mut GLboolean) {
        "glGetBooleanv" => gl(1, 0),
        "glGetBooleanv" => gles(1, 0),
    }

    // ----
    // state toggles and fixed pipeline scalars

    fn glEnable(cap: GLenum) {
        "glEnable" => gl(1, 0),
        "glEnable" => gles(1, 0),
    }
    fn glDisable(cap: GLenum) {
        "glDisable" => gl(1, 0),
        "glDisable" => gles(1, 0),
    }
    fn glIsEnabled(cap: GLenum) -> GLboolean {
        "glIsEnabled" => gl(1, 0),
        "glIsEnabled" => gles(1, 0),
    }
    fn glClear(mask: GLbitfield) {
        "glClear" => gl(1, 0),
        "glClear" => gles(1, 0),
    }
    fn glClearColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
        "glClearColor" => gl(1, 0),
        "glClearColor" => gles(1, 0),
    }
    fn glClearStencil(s: GLint) {
        "glClearStencil" => gl(1, 0),
        "glClearStencil" => gles(1, 0),
    }
    fn glClearDepth(depth: GLdouble) {
        "glClearDepth" => gl(1, 0),
    }
    fn glClearDepthf(d: GLfloat) {
        "glClearDepthf" => gl(4, 1),
        "glClearDepthf" => gles(1, 0),
        "glClearDepthf" => gl_ext("GL_ARB_ES2_compatibility"),
        "glClearDepthfOES" => gl_ext("GL_OES_single_precision"),
    }
    fn glViewport(x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        "glViewport" => gl(1, 0),
        "glViewport" => gles(1, 0),
    }
    fn glScissor(x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        "glScissor" => gl(1, 0),
        "glScissor" => gles(1, 0),
    }
    fn glFlush() {
        "glFlush" => gl(1, 0),
        "glFlush" => gles(1, 0),
    }
    fn glFinish() {
        "glFinish" => gl(1, 0),
        "glFinish" => gles(1, 0),
    }
    fn glHint(target: GLenum, mode: GLenum) {
        "glHint" => gl(1, 0),
        "glHint" => gles(1, 0),
    }
    fn glLineWidth(width: GLfloat) {
        "glLineWidth" => gl(1, 0),
        "glLineWidth" => gles(1, 0),
    }
    fn glCullFace(mode: GLenum) {
        "glCullFace" => gl(1, 0),
        "glCullFace" => gles(1, 0),
    }
    fn glFrontFace(mode: GLenum) {
        "glFrontFace" => gl(1, 0),
        "glFrontFace" => gles(1, 0),
    }
    fn glPolygonMode(face: GLenum, mode: GLenum) {
        "glPolygonMode" => gl(1, 0),
    }
    fn glPolygonOffset(factor: GLfloat, units: GLfloat) {
        "glPolygonOffset" => gl(1, 1),
        "glPolygonOffset" => gles(1, 0),
        "glPolygonOffsetEXT" => gl_ext("GL_EXT_polygon_offset"),
    }
    fn glPixelStorei(pname: GLenum, param: GLint) {
        "glPixelStorei" => gl(1, 0),
        "glPixelStorei" => gles(1, 0),
    }
    fn glReadPixels(
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        r#type: GLenum,
        pixels: *mut c_void,
    ) {
        "glReadPixels" => gl(1, 0),
        "glReadPixels" => gles(1, 0),
    }
    fn glDepthFunc(func: GLenum) {
        "glDepthFunc" => gl(1, 0),
        "glDepthFunc" => gles(1, 0),
    }
    fn glDepthMask(flag: GLboolean) {
        "glDepthMask" => gl(1, 0),
        "glDepthMask" => gles(1, 0),
    }
    fn glDepthRange(n: GLdouble, f: GLdouble) {
        "glDepthRange" => gl(1, 0),
    }
    fn glDepthRangef(n: GLfloat, f: GLfloat) {
        "glDepthRangef" => gl(4, 1),
        "glDepthRangef" => gles(1, 0),
        "glDepthRangef" => gl_ext("GL_ARB_ES2_compatibility"),
        "glDepthRangefOES" => gl_ext("GL_OES_single_precision"),
    }
    fn glColorMask(red: GLboolean, green: GLboolean, blue: GLboolean, alpha: GLboolean) {
        "glColorMask" => gl(1, 0),
        "glColorMask" => gles(1, 0),
    }
    fn glStencilFunc(func: GLenum, r#ref: GLint, mask: GLuint) {
        "glStencilFunc" => gl(1, 0),
        "glStencilFunc" => gles(1, 0),
    }
    fn glStencilMask(mask: GLuint) {
        "glStencilMask" => gl(1, 0),
        "glStencilMask" => gles(1, 0),
    }
    fn glStencilOp(fail: GLenum, zfail: GLenum, zpass: GLenum) {
        "glStencilOp" => gl(1, 0),
        "glStencilOp" => gles(1, 0),
    }

    // ----
    // blending

    fn glBlendFunc(sfactor: GLenum, dfactor: GLenum) {
        "glBlendFunc" => gl(1, 0),
        "glBlendFunc" => gles(1, 0),
    }
    fn glBlendFuncSeparate(
        sfactorRGB: GLenum,
        dfactorRGB: GLenum,
        sfactorAlpha: GLenum,
        dfactorAlpha: GLenum,
    ) {
        "glBlendFuncSeparate" => gl(1, 4),
        "glBlendFuncSeparate" => gles(2, 0),
        "glBlendFuncSeparateEXT" => gl_ext("GL_EXT_blend_func_separate"),
    }
    fn glBlendEquation(mode: GLenum) {
        "glBlendEquation" => gl(1, 4),
        "glBlendEquation" => gles(2, 0),
        "glBlendEquationEXT" => gl_ext("GL_EXT_blend_minmax"),
    }
    fn glBlendEquationSeparate(modeRGB: GLenum, modeAlpha: GLenum) {
        "glBlendEquationSeparate" => gl(2, 0),
        "glBlendEquationSeparate" => gles(2, 0),
        "glBlendEquationSeparateEXT" => gl_ext("GL_EXT_blend_equation_separate"),
    }
    fn glBlendColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
        "glBlendColor" => gl(1, 4),
        "glBlendColor" => gles(2, 0),
        "glBlendColorEXT" => gl_ext("GL_EXT_blend_color"),
    }

    // ----
    // textures

    fn glGenTextures(n: GLsizei, textures: *mut GLuint) {
        "glGenTextures" => gl(1, 1),
        "glGenTextures" => gles(1, 0),
        "glGenTexturesEXT" => gl_ext("GL_EXT_texture_object"),
    }
    fn glDeleteTextures(n: GLsizei, textures: *const GLuint) {
        "glDeleteTextures" => gl(1, 1),
        "glDeleteTextures" => gles(1, 0),
        "glDeleteTexturesEXT" => gl_ext("GL_EXT_texture_object"),
    }
    fn glBindTexture(target: GLenum, texture: GLuint) {
        "glBindTexture" => gl(1, 1),
        "glBindTexture" => gles(1, 0),
        "glBindTextureEXT" => gl_ext("GL_EXT_texture_object"),
    }
    fn glIsTexture(texture: GLuint) -> GLboolean {
        "glIsTexture" => gl(1, 1),
        "glIsTexture" => gles(1, 0),
        "glIsTextureEXT" => gl_ext("GL_EXT_texture_object"),
    }
    fn glActiveTexture(texture: GLenum) {
        "glActiveTexture" => gl(1, 3),
        "glActiveTexture" => gles(1, 0),
        "glActiveTextureARB" => gl_ext("GL_ARB_multitexture"),
    }
    fn glTexImage2D(
        target: GLenum,
        level: GLint,
        internalformat: GLint,
        width: GLsizei,
        height: GLsizei,
        border: GLint,
        format: GLenum,
        r#type: GLenum,
        pixels: *const c_void,
    ) {
        "glTexImage2D" => gl(1, 0),
        "glTexImage2D" => gles(1, 0),
    }
    fn glTexSubImage2D(
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        r#type: GLenum,
        pixels: *const c_void,
    ) {
        "glTexSubImage2D" => gl(1, 1),
        "glTexSubImage2D" => gles(1, 0),
        "glTexSubImage2DEXT" => gl_ext("GL_EXT_subtexture"),
    }
    fn glCopyTexImage2D(
        target: GLenum,
        level: GLint,
        internalformat: GLenum,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
        border: GLint,
    ) {
        "glCopyTexImage2D" => gl(1, 1),
        "glCopyTexImage2D" => gles(1, 0),
        "glCopyTexImage2DEXT" => gl_ext("GL_EXT_copy_texture"),
    }
    fn glTexImage3D(
        target: GLenum,
        level: GLint,
        internalformat: GLint,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
        border: GLint,
        format: GLenum,
        r#type: GLenum,
        pixels: *const c_void,
    ) {
        "glTexImage3D" => gl(1, 2),
        "glTexImage3D" => gles(3, 0),
        "glTexImage3DEXT" => gl_ext("GL_EXT_texture3D"),
        "glTexImage3DOES" => gl_ext("GL_OES_texture_3D"),
    }
    fn glTexParameteri(target: GLenum, pname: GLenum, param: GLint) {
        "glTexParameteri" => gl(1, 0),
        "glTexParameteri" => gles(1, 0),
    }
    fn glTexParameterf(target: GLenum, pname: GLenum, param: GLfloat) {
        "glTexParameterf" => gl(1, 0),
        "glTexParameterf" => gles(1, 0),
    }
    fn glTexParameteriv(target: GLenum, pname: GLenum, params: *const GLint) {
        "glTexParameteriv" => gl(1, 0),
        "glTexParameteriv" => gles(1, 0),
    }
    fn glCompressedTexImage2D(
        target: GLenum,
        level: GLint,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
        border: GLint,
        imageSize: GLsizei,
        data: *const c_void,
    ) {
        "glCompressedTexImage2D" => gl(1, 3),
        "glCompressedTexImage2D" => gles(1, 0),
        "glCompressedTexImage2DARB" => gl_ext("GL_ARB_texture_compression"),
    }
    fn glTexStorage2D(
        target: GLenum,
        levels: GLsizei,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
    ) {
        "glTexStorage2D" => gl(4, 2),
        "glTexStorage2D" => gles(3, 0),
        "glTexStorage2D" => gl_ext("GL_ARB_texture_storage"),
        "glTexStorage2DEXT" => gl_ext("GL_EXT_texture_storage"),
    }
    fn glGenerateMipmap(target: GLenum) {
        "glGenerateMipmap" => gl(3, 0),
        "glGenerateMipmap" => gles(2, 0),
        "glGenerateMipmap" => gl_ext("GL_ARB_framebuffer_object"),
        "glGenerateMipmapEXT" => gl_ext("GL_EXT_framebuffer_object"),
    }

    // ----
    // buffer objects

    fn glGenBuffers(n: GLsizei, buffers: *mut GLuint) {
        "glGenBuffers" => gl(1, 5),
        "glGenBuffers" => gles(1, 1),
        "glGenBuffersARB" => gl_ext("GL_ARB_vertex_buffer_object"),
    }
    fn glDeleteBuffers(n: GLsizei, buffers: *const GLuint) {
        "glDeleteBuffers" => gl(1, 5),
        "glDeleteBuffers" => gles(1, 1),
        "glDeleteBuffersARB" => gl_ext("GL_ARB_vertex_buffer_object"),
    }
    fn glBindBuffer(target: GLenum, buffer: GLuint) {
        "glBindBuffer" => gl(1, 5),
        "glBindBuffer" => gles(1, 1),
        "glBindBufferARB" => gl_ext("GL_ARB_vertex_buffer_object"),
    }
    fn glIsBuffer(buffer: GLuint) -> GLboolean {
        "glIsBuffer" => gl(1, 5),
        "glIsBuffer" => gles(1, 1),
        "glIsBufferARB" => gl_ext("GL_ARB_vertex_buffer_object"),
    }
    fn glBufferData(target: GLenum, size: GLsizeiptr, data: *const c_void, usage: GLenum) {
        "glBufferData" => gl(1, 5),
        "glBufferData" => gles(1, 1),
        "glBufferDataARB" => gl_ext("GL_ARB_vertex_buffer_object"),
    }
    fn glBufferSubData(target: GLenum, offset: GLintptr, size: GLsizeiptr, data: *const c_void) {
        "glBufferSubData" => gl(1, 5),
        "glBufferSubData" => gles(1, 1),
        "glBufferSubDataARB" => gl_ext("GL_ARB_vertex_buffer_object"),
    }
    fn glMapBuffer(target: GLenum, access: GLenum) -> *mut c_void {
        "glMapBuffer" => gl(1, 5),
        "glMapBufferARB" => gl_ext("GL_ARB_vertex_buffer_object"),
        "glMapBufferOES" => gl_ext("GL_OES_mapbuffer"),
    }
    fn glUnmapBuffer(target: GLenum) -> GLboolean {
        "glUnmapBuffer" => gl(1, 5),
        "glUnmapBuffer" => gles(3, 0),
        "glUnmapBufferARB" => gl_ext("GL_ARB_vertex_buffer_object"),
        "glUnmapBufferOES" => gl_ext("GL_OES_mapbuffer"),
    }
    fn glMapBufferRange(
        target: GLenum,
        offset: GLintptr,
        length: GLsizeiptr,
        access: GLbitfield,
    ) -> *mut c_void {
        "glMapBufferRange" => gl(3, 0),
        "glMapBufferRange" => gles(3, 0),
        "glMapBufferRange" => gl_ext("GL_ARB_map_buffer_range"),
        "glMapBufferRangeEXT" => gl_ext("GL_EXT_map_buffer_range"),
    }
    fn glBindBufferBase(target: GLenum, index: GLuint, buffer: GLuint) {
        "glBindBufferBase" => gl(3, 0),
        "glBindBufferBase" => gles(3, 0),
        "glBindBufferBaseEXT" => gl_ext("GL_EXT_transform_feedback"),
    }

    // ----
    // drawing

    fn glDrawArrays(mode: GLenum, first: GLint, count: GLsizei) {
        "glDrawArrays" => gl(1, 1),
        "glDrawArrays" => gles(1, 0),
        "glDrawArraysEXT" => gl_ext("GL_EXT_vertex_array"),
    }
    fn glDrawElements(mode: GLenum, count: GLsizei, r#type: GLenum, indices: *const c_void) {
        "glDrawElements" => gl(1, 1),
        "glDrawElements" => gles(1, 0),
    }
    fn glDrawRangeElements(
        mode: GLenum,
        start: GLuint,
        end: GLuint,
        count: GLsizei,
        r#type: GLenum,
        indices: *const c_void,
    ) {
        "glDrawRangeElements" => gl(1, 2),
        "glDrawRangeElements" => gles(3, 0),
        "glDrawRangeElementsEXT" => gl_ext("GL_EXT_draw_range_elements"),
    }
    fn glDrawArraysInstanced(mode: GLenum, first: GLint, count: GLsizei, instancecount: GLsizei) {
        "glDrawArraysInstanced" => gl(3, 1),
        "glDrawArraysInstanced" => gles(3, 0),
        "glDrawArraysInstancedARB" => gl_ext("GL_ARB_draw_instanced"),
        "glDrawArraysInstancedEXT" => gl_ext("GL_EXT_draw_instanced"),
    }
    fn glDrawElementsInstanced(
        mode: GLenum,
        count: GLsizei,
        r#type: GLenum,
        indices: *const c_void,
        instancecount: GLsizei,
    ) {
        "glDrawElementsInstanced" => gl(3, 1),
        "glDrawElementsInstanced" => gles(3, 0),
        "glDrawElementsInstancedARB" => gl_ext("GL_ARB_draw_instanced"),
        "glDrawElementsInstancedEXT" => gl_ext("GL_EXT_draw_instanced"),
    }
    fn glDrawBuffers(n: GLsizei, bufs: *const GLenum) {
        "glDrawBuffers" => gl(2, 0),
        "glDrawBuffers" => gles(3, 0),
        "glDrawBuffersARB" => gl_ext("GL_ARB_draw_buffers"),
        "glDrawBuffersEXT" => gl_ext("GL_EXT_draw_buffers"),
    }

    // ----
    // shaders and programs

    fn glCreateShader(r#type: GLenum) -> GLuint {
        "glCreateShader" => gl(2, 0),
        "glCreateShader" => gles(2, 0),
        "glCreateShaderObjectARB" => gl_ext("GL_ARB_shader_objects"),
    }
    fn glDeleteShader(shader: GLuint) {
        "glDeleteShader" => gl(2, 0),
        "glDeleteShader" => gles(2, 0),
    }
    fn glShaderSource(
        shader: GLuint,
        count: GLsizei,
        string: *const *const GLchar,
        length: *const GLint,
    ) {
        "glShaderSource" => gl(2, 0),
        "glShaderSource" => gles(2, 0),
        "glShaderSourceARB" => gl_ext("GL_ARB_shader_objects"),
    }
    fn glCompileShader(shader: GLuint) {
        "glCompileShader" => gl(2, 0),
        "glCompileShader" => gles(2, 0),
        "glCompileShaderARB" => gl_ext("GL_ARB_shader_objects"),
    }
    fn glGetShaderiv(shader: GLuint, pname: GLenum, params: *mut GLint) {
        "glGetShaderiv" => gl(2, 0),
        "glGetShaderiv" => gles(2, 0),
    }
    fn glGetShaderInfoLog(
        shader: GLuint,
        bufSize: GLsizei,
        length: *mut GLsizei,
        infoLog: *mut GLchar,
    ) {
        "glGetShaderInfoLog" => gl(2, 0),
        "glGetShaderInfoLog" => gles(2, 0),
    }
    fn glCreateProgram() -> GLuint {
        "glCreateProgram" => gl(2, 0),
        "glCreateProgram" => gles(2, 0),
        "glCreateProgramObjectARB" => gl_ext("GL_ARB_shader_objects"),
    }
    fn glDeleteProgram(program: GLuint) {
        "glDeleteProgram" => gl(2, 0),
        "glDeleteProgram" => gles(2, 0),
    }
    fn glAttachShader(program: GLuint, shader: GLuint) {
        "glAttachShader" => gl(2, 0),
        "glAttachShader" => gles(2, 0),
        "glAttachObjectARB" => gl_ext("GL_ARB_shader_objects"),
    }
    fn glDetachShader(program: GLuint, shader: GLuint) {
        "glDetachShader" => gl(2, 0),
        "glDetachShader" => gles(2, 0),
        "glDetachObjectARB" => gl_ext("GL_ARB_shader_objects"),
    }
    fn glLinkProgram(program: GLuint) {
        "glLinkProgram" => gl(2, 0),
        "glLinkProgram" => gles(2, 0),
        "glLinkProgramARB" => gl_ext("GL_ARB_shader_objects"),
    }
    fn glUseProgram(program: GLuint) {
        "glUseProgram" => gl(2, 0),
        "glUseProgram" => gles(2, 0),
        "glUseProgramObjectARB" => gl_ext("GL_ARB_shader_objects"),
    }
    fn glValidateProgram(program: GLuint) {
        "glValidateProgram" => gl(2, 0),
        "glValidateProgram" => gles(2, 0),
        "glValidateProgramARB" => gl_ext("GL_ARB_shader_objects"),
    }
    fn glGetProgramiv(program: GLuint, pname: GLenum, params: *mut GLint) {
        "glGetProgramiv" => gl(2, 0),
        "glGetProgramiv" => gles(2, 0),
    }
    fn glGetProgramInfoLog(
        program: GLuint,
        bufSize: GLsizei,
        length: *mut GLsizei,
        infoLog: *mut GLchar,
    ) {
        "glGetProgramInfoLog" => gl(2, 0),
        "glGetProgramInfoLog" => gles(2, 0),
    }
    fn glGetUniformLocation(program: GLuint, name: *const GLchar) -> GLint {
        "glGetUniformLocation" => gl(2, 0),
        "glGetUniformLocation" => gles(2, 0),
        "glGetUniformLocationARB" => gl_ext("GL_ARB_shader_objects"),
    }
    fn glGetAttribLocation(program: GLuint, name: *const GLchar) -> GLint {
        "glGetAttribLocation" => gl(2, 0),
        "glGetAttribLocation" => gles(2, 0),
        "glGetAttribLocationARB" => gl_ext("GL_ARB_vertex_shader"),
    }
    fn glBindAttribLocation(program: GLuint, index: GLuint, name: *const GLchar) {
        "glBindAttribLocation" => gl(2, 0),
        "glBindAttribLocation" => gles(2, 0),
        "glBindAttribLocationARB" => gl_ext("GL_ARB_vertex_shader"),
    }
    fn glUniform1i(location: GLint, v0: GLint) {
        "glUniform1i" => gl(2, 0),
        "glUniform1i" => gles(2, 0),
        "glUniform1iARB" => gl_ext("GL_ARB_shader_objects"),
    }
    fn glUniform1f(location: GLint, v0: GLfloat) {
        "glUniform1f" => gl(2, 0),
        "glUniform1f" => gles(2, 0),
        "glUniform1fARB" => gl_ext("GL_ARB_shader_objects"),
    }
    fn glUniform2f(location: GLint, v0: GLfloat, v1: GLfloat) {
        "glUniform2f" => gl(2, 0),
        "glUniform2f" => gles(2, 0),
        "glUniform2fARB" => gl_ext("GL_ARB_shader_objects"),
    }
    fn glUniform3f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat) {
        "glUniform3f" => gl(2, 0),
        "glUniform3f" => gles(2, 0),
        "glUniform3fARB" => gl_ext("GL_ARB_shader_objects"),
    }
    fn glUniform4f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat) {
        "glUniform4f" => gl(2, 0),
        "glUniform4f" => gles(2, 0),
        "glUniform4fARB" => gl_ext("GL_ARB_shader_objects"),
    }
    fn glUniform4fv(location: GLint, count: GLsizei, value: *const GLfloat) {
        "glUniform4fv" => gl(2, 0),
        "glUniform4fv" => gles(2, 0),
        "glUniform4fvARB" => gl_ext("GL_ARB_shader_objects"),
    }
    fn glUniformMatrix4fv(
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLfloat,
    ) {
        "glUniformMatrix4fv" => gl(2, 0),
        "glUniformMatrix4fv" => gles(2, 0),
        "glUniformMatrix4fvARB" => gl_ext("GL_ARB_shader_objects"),
    }
    fn glVertexAttribPointer(
        index: GLuint,
        size: GLint,
        r#type: GLenum,
        normalized: GLboolean,
        stride: GLsizei,
        pointer: *const c_void,
    ) {
        "glVertexAttribPointer" => gl(2, 0),
        "glVertexAttribPointer" => gles(2, 0),
        "glVertexAttribPointerARB" => gl_ext("GL_ARB_vertex_program"),
    }
    fn glEnableVertexAttribArray(index: GLuint) {
        "glEnableVertexAttribArray" => gl(2, 0),
        "glEnableVertexAttribArray" => gles(2, 0),
        "glEnableVertexAttribArrayARB" => gl_ext("GL_ARB_vertex_program"),
    }
    fn glDisableVertexAttribArray(index: GLuint) {
        "glDisableVertexAttribArray" => gl(2, 0),
        "glDisableVertexAttribArray" => gles(2, 0),
        "glDisableVertexAttribArrayARB" => gl_ext("GL_ARB_vertex_program"),
    }
    fn glVertexAttribDivisor(index: GLuint, divisor: GLuint) {
        "glVertexAttribDivisor" => gl(3, 3),
        "glVertexAttribDivisor" => gles(3, 0),
        "glVertexAttribDivisorARB" => gl_ext("GL_ARB_instanced_arrays"),
    }

    // ----
    // framebuffer and renderbuffer objects. the EXT names are not strict
    // aliases (bind-without-gen behaves differently) but are close enough to
    // fall back on when the proper one is missing, so each direction lists
    // the other as its last candidate.

    fn glGenFramebuffers(n: GLsizei, framebuffers: *mut GLuint) {
        "glGenFramebuffers" => gl(3, 0),
        "glGenFramebuffers" => gles(2, 0),
        "glGenFramebuffers" => gl_ext("GL_ARB_framebuffer_object"),
        "glGenFramebuffersEXT" => gl_ext("GL_EXT_framebuffer_object"),
    }
    fn glDeleteFramebuffers(n: GLsizei, framebuffers: *const GLuint) {
        "glDeleteFramebuffers" => gl(3, 0),
        "glDeleteFramebuffers" => gles(2, 0),
        "glDeleteFramebuffers" => gl_ext("GL_ARB_framebuffer_object"),
        "glDeleteFramebuffersEXT" => gl_ext("GL_EXT_framebuffer_object"),
    }
    fn glBindFramebuffer(target: GLenum, framebuffer: GLuint) {
        "glBindFramebuffer" => gl(3, 0),
        "glBindFramebuffer" => gles(2, 0),
        "glBindFramebuffer" => gl_ext("GL_ARB_framebuffer_object"),
        "glBindFramebufferEXT" => gl_ext("GL_EXT_framebuffer_object"),
    }
    fn glBindFramebufferEXT(target: GLenum, framebuffer: GLuint) {
        "glBindFramebufferEXT" => gl_ext("GL_EXT_framebuffer_object"),
        "glBindFramebuffer" => gl(3, 0),
        "glBindFramebuffer" => gles(2, 0),
        "glBindFramebuffer" => gl_ext("GL_ARB_framebuffer_object"),
    }
    fn glFramebufferTexture2D(
        target: GLenum,
        attachment: GLenum,
        textarget: GLenum,
        texture: GLuint,
        level: GLint,
    ) {
        "glFramebufferTexture2D" => gl(3, 0),
        "glFramebufferTexture2D" => gles(2, 0),
        "glFramebufferTexture2D" => gl_ext("GL_ARB_framebuffer_object"),
        "glFramebufferTexture2DEXT" => gl_ext("GL_EXT_framebuffer_object"),
    }
    fn glFramebufferRenderbuffer(
        target: GLenum,
        attachment: GLenum,
        renderbuffertarget: GLenum,
        renderbuffer: GLuint,
    ) {
        "glFramebufferRenderbuffer" => gl(3, 0),
        "glFramebufferRenderbuffer" => gles(2, 0),
        "glFramebufferRenderbuffer" => gl_ext("GL_ARB_framebuffer_object"),
        "glFramebufferRenderbufferEXT" => gl_ext("GL_EXT_framebuffer_object"),
    }
    fn glCheckFramebufferStatus(target: GLenum) -> GLenum {
        "glCheckFramebufferStatus" => gl(3, 0),
        "glCheckFramebufferStatus" => gles(2, 0),
        "glCheckFramebufferStatus" => gl_ext("GL_ARB_framebuffer_object"),
        "glCheckFramebufferStatusEXT" => gl_ext("GL_EXT_framebuffer_object"),
    }
    fn glGenRenderbuffers(n: GLsizei, renderbuffers: *mut GLuint) {
        "glGenRenderbuffers" => gl(3, 0),
        "glGenRenderbuffers" => gles(2, 0),
        "glGenRenderbuffers" => gl_ext("GL_ARB_framebuffer_object"),
        "glGenRenderbuffersEXT" => gl_ext("GL_EXT_framebuffer_object"),
    }
    fn glDeleteRenderbuffers(n: GLsizei, renderbuffers: *const GLuint) {
        "glDeleteRenderbuffers" => gl(3, 0),
        "glDeleteRenderbuffers" => gles(2, 0),
        "glDeleteRenderbuffers" => gl_ext("GL_ARB_framebuffer_object"),
        "glDeleteRenderbuffersEXT" => gl_ext("GL_EXT_framebuffer_object"),
    }
    fn glBindRenderbuffer(target: GLenum, renderbuffer: GLuint) {
        "glBindRenderbuffer" => gl(3, 0),
        "glBindRenderbuffer" => gles(2, 0),
        "glBindRenderbuffer" => gl_ext("GL_ARB_framebuffer_object"),
        "glBindRenderbufferEXT" => gl_ext("GL_EXT_framebuffer_object"),
    }
    fn glBindRenderbufferEXT(target: GLenum, renderbuffer: GLuint) {
        "glBindRenderbufferEXT" => gl_ext("GL_EXT_framebuffer_object"),
        "glBindRenderbuffer" => gl(3, 0),
        "glBindRenderbuffer" => gles(2, 0),
        "glBindRenderbuffer" => gl_ext("GL_ARB_framebuffer_object"),
    }
    fn glRenderbufferStorage(
        target: GLenum,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
    ) {
        "glRenderbufferStorage" => gl(3, 0),
        "glRenderbufferStorage" => gles(2, 0),
        "glRenderbufferStorage" => gl_ext("GL_ARB_framebuffer_object"),
        "glRenderbufferStorageEXT" => gl_ext("GL_EXT_framebuffer_object"),
    }
    fn glBlitFramebuffer(
        srcX0: GLint,
        srcY0: GLint,
        srcX1: GLint,
        srcY1: GLint,
        dstX0: GLint,
        dstY0: GLint,
        dstX1: GLint,
        dstY1: GLint,
        mask: GLbitfield,
        filter: GLenum,
    ) {
        "glBlitFramebuffer" => gl(3, 0),
        "glBlitFramebuffer" => gles(3, 0),
        "glBlitFramebuffer" => gl_ext("GL_ARB_framebuffer_object"),
        "glBlitFramebufferEXT" => gl_ext("GL_EXT_framebuffer_blit"),
    }
    fn glInvalidateFramebuffer(target: GLenum, numAttachments: GLsizei, attachments: *const GLenum) {
        "glInvalidateFramebuffer" => gl(4, 3),
        "glInvalidateFramebuffer" => gles(3, 0),
        "glInvalidateFramebuffer" => gl_ext("GL_ARB_invalidate_subdata"),
    }

    // ----
    // vertex array objects

    fn glGenVertexArrays(n: GLsizei, arrays: *mut GLuint) {
        "glGenVertexArrays" => gl(3, 0),
        "glGenVertexArrays" => gles(3, 0),
        "glGenVertexArrays" => gl_ext("GL_ARB_vertex_array_object"),
        "glGenVertexArraysAPPLE" => gl_ext("GL_APPLE_vertex_array_object"),
        "glGenVertexArraysOES" => gl_ext("GL_OES_vertex_array_object"),
    }
    fn glDeleteVertexArrays(n: GLsizei, arrays: *const GLuint) {
        "glDeleteVertexArrays" => gl(3, 0),
        "glDeleteVertexArrays" => gles(3, 0),
        "glDeleteVertexArrays" => gl_ext("GL_ARB_vertex_array_object"),
        "glDeleteVertexArraysAPPLE" => gl_ext("GL_APPLE_vertex_array_object"),
        "glDeleteVertexArraysOES" => gl_ext("GL_OES_vertex_array_object"),
    }
    fn glBindVertexArray(array: GLuint) {
        "glBindVertexArray" => gl(3, 0),
        "glBindVertexArray" => gles(3, 0),
        "glBindVertexArray" => gl_ext("GL_ARB_vertex_array_object"),
        "glBindVertexArrayAPPLE" => gl_ext("GL_APPLE_vertex_array_object"),
        "glBindVertexArrayOES" => gl_ext("GL_OES_vertex_array_object"),
    }
    fn glBindVertexArrayAPPLE(array: GLuint) {
        "glBindVertexArrayAPPLE" => gl_ext("GL_APPLE_vertex_array_object"),
        "glBindVertexArray" => gl(3, 0),
        "glBindVertexArray" => gl_ext("GL_ARB_vertex_array_object"),
    }

    // ----
    // sync objects

    fn glFenceSync(condition: GLenum, flags: GLbitfield) -> GLsync {
        "glFenceSync" => gl(3, 2),
        "glFenceSync" => gles(3, 0),
        "glFenceSync" => gl_ext("GL_ARB_sync"),
        "glFenceSyncAPPLE" => gl_ext("GL_APPLE_sync"),
    }
    fn glDeleteSync(sync: GLsync) {
        "glDeleteSync" => gl(3, 2),
        "glDeleteSync" => gles(3, 0),
        "glDeleteSync" => gl_ext("GL_ARB_sync"),
        "glDeleteSyncAPPLE" => gl_ext("GL_APPLE_sync"),
    }
    fn glClientWaitSync(sync: GLsync, flags: GLbitfield, timeout: GLuint64) -> GLenum {
        "glClientWaitSync" => gl(3, 2),
        "glClientWaitSync" => gles(3, 0),
        "glClientWaitSync" => gl_ext("GL_ARB_sync"),
        "glClientWaitSyncAPPLE" => gl_ext("GL_APPLE_sync"),
    }

    // ----
    // compute and debug

    fn glDispatchCompute(num_groups_x: GLuint, num_groups_y: GLuint, num_groups_z: GLuint) {
        "glDispatchCompute" => gl(4, 3),
        "glDispatchCompute" => gles(3, 1),
        "glDispatchCompute" => gl_ext("GL_ARB_compute_shader"),
    }
    fn glDebugMessageCallback(callback: GLDEBUGPROC, userParam: *const c_void) {
        "glDebugMessageCallback" => gl(4, 3),
        "glDebugMessageCallback" => gl_ext("GL_KHR_debug"),
        "glDebugMessageCallbackKHR" => gl_ext("GL_KHR_debug"),
        "glDebugMessageCallbackARB" => gl_ext("GL_ARB_debug_output"),
    }
    fn glObjectLabel(identifier: GLenum, name: GLuint, length: GLsizei, label: *const GLchar) {
        "glObjectLabel" => gl(4, 3),
        "glObjectLabel" => gl_ext("GL_KHR_debug"),
        "glObjectLabelKHR" => gl_ext("GL_KHR_debug"),
    }

    // ----
    // fixed-function leftovers, gone in gles 2.0

    fn glAlphaFunc(func: GLenum, r#ref: GLfloat) {
        "glAlphaFunc" => gl(1, 0),
        "glAlphaFunc" => gles1(),
    }
    fn glLoadIdentity() {
        "glLoadIdentity" => gl(1, 0),
        "glLoadIdentity" => gles1(),
    }
    fn glMatrixMode(mode: GLenum) {
        "glMatrixMode" => gl(1, 0),
        "glMatrixMode" => gles1(),
    }
}
