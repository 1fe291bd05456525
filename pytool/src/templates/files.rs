//! Template file contents

/// File name of the program template within the template tree.
pub const PROG_FILE: &str = "prog.py";

/// File name of the tool template within the template tree.
pub const TOOL_FILE: &str = "tool.py";

/// prog.py: minimal main()-pattern python program
pub const PROG_PY: &str = r#"import sys

def main():
    """
    main entrypoint
    """
    print("This is where your code goes")


if __name__ == "__main__":
    main()
"#;

/// tool.py: docopt-dispatch style program with a usage header
pub const TOOL_PY: &str = r#""""
Usage:
    prog [-d] ARG ARG ...

Options:
    -d      use the debugger
"""
from docopt_dispatch import dispatch
import sys

def main():
    """
    main entrypoint
    """
    print("This is where your code goes")


if __name__ == "__main__":
    main()
"#;

/// `__init__.py` for the generated package, identical to the program body
pub const INIT_PY: &str = PROG_PY;

/// README.md seed for new projects
pub const README_MD: &str = r"# Project Title

Describe your project here
";

/// setup.py skeleton with author and entry-point placeholders
pub const SETUP_PY: &str = r#"from setuptools import setup

setup(name="PROJECT"
    author="Your Name",
    author_email="your_address@domain.com",
    entry_points={'console_scripts': [proj = proj:main]}
    )
"#;

/// pytest stub dropped into the project's test directory
pub const TEST_STUB_PY: &str = r#"import pytest

def test_function():
    """
    Test function description
    """
    print("Put your test code here")
"#;
