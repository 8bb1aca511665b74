//! Getting raw diff text from outside the process.

use error_set::error_set;
use std::io::Read;
use std::path::Path;

error_set! {
    /// Errors from reading diff input
    InputError := {
        #[display("Failed to read {source_name}: {message}")]
        ReadFailed { source_name: String, message: String },
        #[display("{source_name} is not a text file (expected UTF-8 diff or patch text)")]
        NotText { source_name: String },
    }
}

/// Read diff text from a file, or from stdin when `path` is `-`
pub fn read_diff(path: &Path) -> Result<String, InputError> {
    let source_name = path.display().to_string();

    let bytes = if path.as_os_str() == "-" {
        let mut bytes = Vec::new();
        std::io::stdin().lock().read_to_end(&mut bytes).map(|_| bytes)
    } else {
        std::fs::read(path)
    }
    .map_err(|e| InputError::ReadFailed {
        source_name: source_name.clone(),
        message: e.to_string(),
    })?;

    decode_text(bytes, &source_name)
}

/// Accept `bytes` only if they look like text
pub fn decode_text(bytes: Vec<u8>, source_name: &str) -> Result<String, InputError> {
    if bytes.contains(&0) {
        return Err(InputError::NotText {
            source_name: source_name.to_string(),
        });
    }

    String::from_utf8(bytes).map_err(|_| InputError::NotText {
        source_name: source_name.to_string(),
    })
}

/// A small two-file diff for trying out the viewer
pub fn sample_diff() -> &'static str {
    r#"diff --git a/src/components/Button.js b/src/components/Button.js
index 1234567..abcdefg 100644
--- a/src/components/Button.js
+++ b/src/components/Button.js
@@ -1,10 +1,12 @@
 import React from 'react';
+import PropTypes from 'prop-types';
 
-const Button = ({ children, onClick }) => {
+const Button = ({ children, onClick, variant = 'primary' }) => {
   return (
     <button
-      className="bg-blue-500 text-white px-4 py-2 rounded"
+      className={`px-4 py-2 rounded ${variant === 'primary' ? 'bg-blue-500 text-white' : 'bg-gray-200 text-gray-800'}`}
       onClick={onClick}
+      type="button"
     >
       {children}
     </button>
@@ -12,4 +14,10 @@
 };
 
+Button.propTypes = {
+  children: PropTypes.node.isRequired,
+  onClick: PropTypes.func,
+  variant: PropTypes.oneOf(['primary', 'secondary'])
+};
+
 export default Button;
diff --git a/src/utils/helpers.js b/src/utils/helpers.js
new file mode 100644
index 0000000..1234567
--- /dev/null
+++ b/src/utils/helpers.js
@@ -0,0 +1,15 @@
+/**
+ * Utility functions for the application
+ */
+
+export const formatDate = (date) => {
+  return new Intl.DateTimeFormat('en-US', {
+    year: 'numeric',
+    month: 'long',
+    day: 'numeric'
+  }).format(new Date(date));
+};
+
+export const debounce = (func, wait) => {
+  let timeout;
+  return function executedFunction(...args) {
+    const later = () => {
+      clearTimeout(timeout);
+      func(...args);
+    };
+    clearTimeout(timeout);
+    timeout = setTimeout(later, wait);
+  };
+};"#
}
