use super::*;
use assert_cmd::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_binary_no_args() {
	cargo_bin_cmd!("pre-commit-mypy")
		.assert()
		.code(1)
		.stdout(predicate::str::is_empty())
		.stderr(predicate::str::contains("PCMW : USAGE:").and(predicate::str::contains("<FILE> ...")));
}

#[test]
fn test_binary_forwards_args_and_exit_code() {
	let tempdir = tempfile::tempdir().unwrap();
	let mypy = tempdir.path().join("mypy");
	let python = tempdir.path().join("python3");
	echo_script(&mypy, 2);
	fs::write(&python, "").unwrap();
	write_config(
		tempdir.path(),
		&format!("mypy: {}  # pinned\npython: {}\n", mypy.display(), python.display()),
	);

	let expected = format!(
		"{}\n--python-executable\n{}\n--ignore-missing-imports\nsrc/a.py\n",
		mypy.display(),
		python.display()
	);
	cargo_bin_cmd!("pre-commit-mypy")
		.current_dir(tempdir.path())
		.env("PATH", "")
		.args(["--ignore-missing-imports", "src/a.py"])
		.assert()
		.code(2)
		.stdout(predicate::str::diff(expected))
		.stderr(predicate::str::contains("PCMW : Will run:").and(predicate::str::contains("PCMW : CWD:")));
}

#[test]
fn test_binary_python_only() {
	let tempdir = tempfile::tempdir().unwrap();
	let python = tempdir.path().join("python3");
	echo_script(&python, 0);
	write_config(tempdir.path(), &format!("python: {}\n", python.display()));

	cargo_bin_cmd!("pre-commit-mypy")
		.current_dir(tempdir.path())
		.arg("a.py")
		.assert()
		.success()
		.stdout(predicate::str::diff(format!("{}\n-m\nmypy\na.py\n", python.display())))
		.stderr(predicate::str::contains("specified without `mypy`"));
}

#[test]
fn test_binary_path_fallback() {
	let tempdir = tempfile::tempdir().unwrap();
	let bin = tempdir.path().join("bin");
	fs::create_dir(&bin).unwrap();
	echo_script(&bin.join("mypy"), 0);

	cargo_bin_cmd!("pre-commit-mypy")
		.current_dir(tempdir.path())
		.env("PATH", &bin)
		.arg("a.py")
		.assert()
		.success()
		.stdout(predicate::str::diff(format!("{}\na.py\n", bin.join("mypy").display())))
		.stderr(
			predicate::str::contains("PCMW : WARNING: config file")
				.and(predicate::str::contains("available in PATH as fallback"))
				.and(predicate::str::contains(CONFIG_FILE_NAME)),
		);
}

#[test]
fn test_binary_tool_not_found() {
	let tempdir = tempfile::tempdir().unwrap();
	let bin = tempdir.path().join("bin");
	fs::create_dir(&bin).unwrap();

	cargo_bin_cmd!("pre-commit-mypy")
		.current_dir(tempdir.path())
		.env("PATH", &bin)
		.arg("a.py")
		.assert()
		.code(1)
		.stdout(predicate::str::is_empty())
		.stderr(predicate::str::contains("PCMW : ERROR: `mypy` not available in PATH").and(predicate::str::contains(CONFIG_FILE_NAME)));
}

#[test]
fn test_binary_missing_referent() {
	let tempdir = tempfile::tempdir().unwrap();
	write_config(tempdir.path(), "mypy: /nonexistent/path/to/mypy\n");

	cargo_bin_cmd!("pre-commit-mypy")
		.current_dir(tempdir.path())
		.arg("a.py")
		.assert()
		.code(1)
		.stderr(predicate::str::contains("/nonexistent/path/to/mypy"));
}

#[test]
fn test_binary_parse_error() {
	let tempdir = tempfile::tempdir().unwrap();
	write_config(tempdir.path(), "\n# header\nfoo\n");

	cargo_bin_cmd!("pre-commit-mypy")
		.current_dir(tempdir.path())
		.arg("a.py")
		.assert()
		.code(1)
		.stderr(predicate::str::contains("line 3").and(predicate::str::contains("`foo`")));
}

#[test]
fn test_binary_unknown_key() {
	let tempdir = tempfile::tempdir().unwrap();
	write_config(tempdir.path(), "mypy_path: /x\n");

	cargo_bin_cmd!("pre-commit-mypy")
		.current_dir(tempdir.path())
		.arg("a.py")
		.assert()
		.code(1)
		.stderr(predicate::str::contains("unknown key `mypy_path`"));
}
