//! Tests for process termination by the fatal family
//!
//! A fatal call ends the whole process, so each case re-runs this test
//! binary filtered down to a single child test and inspects the exit status
//! and output of that child.

#[cfg(test)]
mod tests {
    use logfacade::{Logger, Output};
    use std::process::{Command, Output as ProcessOutput};

    const CHILD_ENV: &str = "LOGFACADE_FATAL_CHILD";

    fn run_child(test_name: &str) -> ProcessOutput {
        let exe = std::env::current_exe().expect("test binary path");
        Command::new(exe)
            .arg(test_name)
            .arg("--nocapture")
            .arg("--test-threads=1")
            .env(CHILD_ENV, "1")
            .output()
            .expect("failed to spawn child test process")
    }

    fn is_child() -> bool {
        std::env::var_os(CHILD_ENV).is_some()
    }

    fn stderr_logger() -> Logger {
        Logger::builder()
            .output(Output::stderr())
            .colors(false)
            .build()
    }

    #[test]
    fn fatal_child_fatalf() {
        if !is_child() {
            return;
        }
        stderr_logger().fatalf(format_args!("cannot bind port {}", 8080));
    }

    #[test]
    fn fatal_child_fatalln_skips_destructors() {
        if !is_child() {
            return;
        }

        struct Noisy;
        impl Drop for Noisy {
            fn drop(&mut self) {
                eprintln!("destructor ran");
            }
        }

        let _noisy = Noisy;
        stderr_logger().fatalln(&[&"shutting", &"down"]);
    }

    #[test]
    fn test_fatalf_exits_with_status_one() {
        let output = run_child("fatal_child_fatalf");
        let stderr = String::from_utf8_lossy(&output.stderr);

        assert_eq!(output.status.code(), Some(1), "stderr: {stderr}");
        assert!(stderr.contains("FATA cannot bind port 8080\n"));
    }

    #[test]
    fn test_fatal_skips_destructors() {
        let output = run_child("fatal_child_fatalln_skips_destructors");
        let stderr = String::from_utf8_lossy(&output.stderr);

        assert_eq!(output.status.code(), Some(1), "stderr: {stderr}");
        assert!(stderr.contains("FATA shutting down\n"));
        assert!(!stderr.contains("destructor ran"));
    }
}
