use super::types::SourceFile;

/// System instruction sent alongside every prompt.
pub const SYSTEM_MESSAGE: &str =
    "You are a C++ expert. Respond ONLY with the split files as described.";

const PREAMBLE: &str = "\
You are an expert C++ programmer. I have provided a C++ header file with multiple classes and their implementations in a cc file. I need you to split this into separate .hh and .cc files for each class.

The input code is:";

const FORMAT_INSTRUCTIONS: &str = r#"
Please respond ONLY with the split code in the following exact format:
For each class, provide two files: [class_name].hh and [class_name].cc by converting the class name from PascalCase to snake_case
Use your understanding of how the code works in order to #include the appropriate files from each other as necessary.
Most classes are defined in .hh files ending with the class converted to their snake_case, so try to copy the relevant #includes from the original file to the new split files as necessary.
Ensure that the class definitions and implementations remain in the same namespaces as before.
Put #pragma once at the top of header files.
Use '---' as a separator between each class's files
Precede each file with a comment line in the format: // [FileName]
Include ONLY the file content immediately following the comment line
Ensure the code is properly formatted and correct.
Do NOT include ANY explanations, comments, or extra text outside of the file output

The output should look like this example:
// my_class.hh
#pragma once

#include "necessary_includes.hh"
#include "foo.hh"

namespace my_namespace {

class MyClass {
  Foo foo;
 public:
  void my_method();
};
}  // namespace my_namespace

---
// my_class.cc
#include "my_class.hh"

namespace my_namespace {

class MyClass {
public:
  void my_method() {
    // Implementation
  }
}
}  // namespace my_namespace
"#;

/// Build the user prompt for a header/implementation pair.
///
/// Each input is introduced by a `// <file name>` line and the two are
/// separated by a `---` line, the same layout the model is asked to answer in.
pub fn build_prompt(header: &SourceFile, implementation: &SourceFile) -> String {
    [
        PREAMBLE.to_string(),
        format!("// {}", header.file_name()),
        header.content.clone(),
        "---".to_string(),
        format!("// {}", implementation.file_name()),
        implementation.content.clone(),
        FORMAT_INSTRUCTIONS.to_string(),
    ]
    .join("\n")
}
