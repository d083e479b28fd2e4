/// Read text from an FLTK TextBuffer without leaking the C-allocated copy.
///
/// fltk-rs's `TextBuffer::text()` copies the `malloc()`'d C string that
/// `Fl_Text_Buffer_text()` returns but never frees the original pointer,
/// leaking the full buffer size on every call. The editor reads the whole
/// buffer on every content change, so the leak would add up fast. This
/// helper calls the FFI directly and frees the C allocation itself.
pub fn buffer_text_no_leak(buf: &fltk::text::TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY: `buf.as_ptr()` is valid while `buf` exists, and
    // `Fl_Text_Buffer_text` returns either null (empty buffer) or a
    // malloc'd, null-terminated C string. We copy it into a Rust String
    // and release the C allocation with the matching `free`.
    unsafe {
        let inner = buf.as_ptr() as *mut std::ffi::c_void;
        let ptr = Fl_Text_Buffer_text(inner);
        if ptr.is_null() {
            return String::new();
        }
        let cstr = std::ffi::CStr::from_ptr(ptr);
        let result = cstr.to_string_lossy().into_owned();
        free(ptr as *mut std::ffi::c_void);
        result
    }
}
