use assert_cmd::Command;

pub fn markgone_cmd() -> Command {
    let mut cmd = Command::cargo_bin("markgone").unwrap();
    cmd.env_remove("MARKGONE_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}
