//! Help text for `pytool help [COMMAND]`

/// Command-description list printed by bare `pytool help`.
pub const HELP_OVERVIEW: &str = "\
pytool examples:

    pytool help
        Display this list of command descriptions

    pytool project PATH
        Create a python project in PATH

    pytool program PATH
        Create a python program in PATH

    pytool tool PATH
        Create a new tool-style python program in PATH

    pytool version
        Print the pytool version
";

/// Long description for `pytool help project`.
pub const HELP_PROJECT: &str = "\
'pytool project PATH' will create a directory at PATH and drop in the
skeleton of a python project. After creating your project, to add
version control, you might do:

   $ cd PATH
   $ git init
   $ git add .
";

/// Long description for `pytool help program`.
pub const HELP_PROGRAM: &str = "\
'pytool program PATH' will create a python program at PATH. If PATH
ends with '.py', your code will be importable. You can run your program
with a command line like

   $ python PATH options arguments

or by setting an alias:

   $ alias cmd='python PATH'

which will allow you to do

   $ cmd options arguments
";

/// Long description for `pytool help tool`.
pub const HELP_TOOL: &str = "\
'pytool tool PATH' will create a python program at PATH that has
command line dispatchable entry points (i.e., sub-commands). pytool is
itself such a program. You can run your program with a command line like

   $ python PATH subcmd options arguments

or by setting an alias:

   $ alias cmd='python PATH'

which will allow you to do

   $ cmd subcmd options arguments
";

/// Long description for `pytool help help`.
pub const HELP_HELP: &str = "\
'pytool help' lists the available commands; 'pytool help COMMAND'
describes COMMAND in more detail.
";

/// Long description for `pytool help version`.
pub const HELP_VERSION: &str = "\
'pytool version' prints the installed pytool version.
";
