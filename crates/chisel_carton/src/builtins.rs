//! Identifiers that are always in scope for a JSX fragment.
//!
//! Provides lookup for:
//! - ECMAScript globals (Array, Object, Math, etc.)
//! - Host globals shared by browsers and React Native (console, fetch, timers)
//!
//! Uses compile-time perfect hash functions (phf) for O(1) lookup
//! with zero runtime initialization cost.

use phf::phf_set;

// =============================================================================
// Compile-time Perfect Hash Sets
// =============================================================================

/// ECMAScript global objects and built-in constructors.
static JS_GLOBALS_SET: phf::Set<&'static str> = phf_set! {
    // ES primitives/values
    "Infinity",
    "undefined",
    "NaN",
    "globalThis",
    // Built-in constructors
    "AggregateError",
    "Array",
    "ArrayBuffer",
    "BigInt",
    "BigInt64Array",
    "BigUint64Array",
    "Boolean",
    "DataView",
    "Date",
    "Error",
    "EvalError",
    "FinalizationRegistry",
    "Float32Array",
    "Float64Array",
    "Function",
    "Int8Array",
    "Int16Array",
    "Int32Array",
    "Intl",
    "JSON",
    "Map",
    "Math",
    "Number",
    "Object",
    "Promise",
    "Proxy",
    "RangeError",
    "ReferenceError",
    "Reflect",
    "RegExp",
    "Set",
    "SharedArrayBuffer",
    "String",
    "Symbol",
    "SyntaxError",
    "TypeError",
    "URIError",
    "Uint8Array",
    "Uint8ClampedArray",
    "Uint16Array",
    "Uint32Array",
    "WeakMap",
    "WeakRef",
    "WeakSet",
    // Global functions
    "decodeURI",
    "decodeURIComponent",
    "encodeURI",
    "encodeURIComponent",
    "eval",
    "isFinite",
    "isNaN",
    "parseFloat",
    "parseInt",
    // Function-scoped implicit binding
    "arguments",
};

/// Host globals available to UI code in browsers and React Native.
static HOST_GLOBALS_SET: phf::Set<&'static str> = phf_set! {
    "alert",
    "cancelAnimationFrame",
    "clearInterval",
    "clearTimeout",
    "console",
    "document",
    "fetch",
    "FormData",
    "Headers",
    "navigator",
    "queueMicrotask",
    "Request",
    "requestAnimationFrame",
    "Response",
    "setInterval",
    "setTimeout",
    "URL",
    "URLSearchParams",
    "WebSocket",
    "window",
    "XMLHttpRequest",
    // Module system
    "exports",
    "module",
    "require",
};

// =============================================================================
// Lookup Functions
// =============================================================================

/// Check if a name is an ECMAScript global.
#[inline]
pub fn is_js_global(name: &str) -> bool {
    JS_GLOBALS_SET.contains(name)
}

/// Check if a name is a host (browser / React Native runtime) global.
#[inline]
pub fn is_host_global(name: &str) -> bool {
    HOST_GLOBALS_SET.contains(name)
}

/// Check if a name never needs to be imported or passed as a prop.
#[inline]
pub fn is_known_global(name: &str) -> bool {
    is_js_global(name) || is_host_global(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_globals() {
        assert!(is_js_global("Array"));
        assert!(is_js_global("Object"));
        assert!(is_js_global("undefined"));
        assert!(!is_js_global("console"));
        assert!(!is_js_global("myVar"));
    }

    #[test]
    fn test_host_globals() {
        assert!(is_host_global("console"));
        assert!(is_host_global("fetch"));
        assert!(!is_host_global("Math"));
    }

    #[test]
    fn test_known_global() {
        assert!(is_known_global("Math"));
        assert!(is_known_global("setTimeout"));
        assert!(!is_known_global("styles"));
        assert!(!is_known_global("View"));
    }
}
