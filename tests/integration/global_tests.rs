//! Tests for the process-wide logger, its free functions and macros

#[cfg(test)]
mod tests {
    use crate::common::assertions::assert_dump_block;
    use crate::common::{GlobalLoggerGuard, strip_ansi};
    use logfacade::{Level, Output};
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn test_default_logger_is_shared() {
        assert!(std::ptr::eq(logfacade::logger(), logfacade::logger()));
    }

    #[test]
    fn test_set_output_and_output_round_trip() {
        let _guard = GlobalLoggerGuard::acquire(Level::Info);
        let output = Output::new(Vec::new());

        logfacade::set_output(output.clone());
        assert!(logfacade::output().same_sink(&output));
    }

    #[test]
    fn test_set_debug_on_global() {
        let guard = GlobalLoggerGuard::acquire(Level::Info);

        logfacade::set_debug(true);
        logfacade::debugf!("pool size {}", 4);
        logfacade::set_debug(false);
        logfacade::debugf!("pool size {}", 8);

        assert_eq!(strip_ansi(&guard.contents()), "DEBU pool size 4\n");
    }

    #[test]
    fn test_leveled_macros() {
        let guard = GlobalLoggerGuard::acquire(Level::Debug);

        logfacade::debug!("d", 1);
        logfacade::info!("i", 2);
        logfacade::infoln!("i", "ln");
        logfacade::warn!("w");
        logfacade::warningf!("w{}", "f");
        logfacade::errorf!("e{}", 3);
        logfacade::errorln!();

        assert_eq!(
            strip_ansi(&guard.contents()),
            "DEBU d 1\nINFO i 2\nINFO i ln\nWARN w\nWARN wf\nERRO e3\nERRO \n"
        );
    }

    #[test]
    fn test_macros_respect_level() {
        let guard = GlobalLoggerGuard::acquire(Level::Error);

        logfacade::info!("hidden");
        logfacade::warnf!("hidden {}", 1);
        logfacade::error!("shown");

        assert_eq!(strip_ansi(&guard.contents()), "ERRO shown\n");
    }

    #[test]
    fn test_print_macros_bypass_level() {
        let guard = GlobalLoggerGuard::acquire(Level::Panic);

        logfacade::printf!("{}:", "raw");
        logfacade::print!("a", 1);
        logfacade::println!("b", 2);

        assert_eq!(guard.contents(), "raw:a1b 2\n");
    }

    #[test]
    fn test_panic_macro_unwinds() {
        let guard = GlobalLoggerGuard::acquire(Level::Info);

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            logfacade::panicf!("bad state {}", 9);
        }));

        assert!(result.is_err());
        assert_eq!(strip_ansi(&guard.contents()), "PANI bad state 9\n");
    }

    #[test]
    fn test_script_helpers_on_global() {
        let guard = GlobalLoggerGuard::acquire(Level::Info);

        logfacade::log_script_error("myscript", "boom");
        logfacade::log_script_warn("other", 1.5);

        assert_eq!(
            strip_ansi(&guard.contents()),
            "ERRO script error [myscript]: boom\nWARN script warn [other]: 1.5\n"
        );
    }

    #[test]
    fn test_global_dump_json() {
        let guard = GlobalLoggerGuard::acquire(Level::Info);

        logfacade::dump_json("X", &serde_json::json!({"a": 1}));

        let contents = guard.contents();
        let body = assert_dump_block(&contents, "X");
        assert_eq!(body, "{\n  \"a\": 1\n}\n");
    }

    #[test]
    fn test_global_debug_gated_dumps() {
        let guard = GlobalLoggerGuard::acquire(Level::Info);

        logfacade::ddump_json("X", &serde_json::json!({"a": 1}));
        logfacade::ddump("Y", &vec![1, 2]);
        logfacade::ddump_unmarshaled("Z", b"not json at all");
        assert!(guard.captured.is_empty());

        logfacade::set_debug(true);
        logfacade::ddump("Y", &vec![1, 2]);
        let contents = guard.contents();
        let body = assert_dump_block(&contents, "Y");
        assert!(body.ends_with("[\n    1,\n    2,\n]\n"));
    }

    #[test]
    fn test_global_ddump_unmarshaled_invalid_json_panics() {
        let guard = GlobalLoggerGuard::acquire(Level::Debug);

        let result = panic::catch_unwind(|| {
            logfacade::ddump_unmarshaled("Y", b"{\"a\": ");
        });

        assert!(result.is_err());
        assert!(guard.captured.is_empty());
    }

    #[test]
    fn test_global_dump_is_unconditional() {
        let guard = GlobalLoggerGuard::acquire(Level::Fatal);

        logfacade::dump("flags", &(true, "x"));

        let contents = guard.contents();
        let body = assert_dump_block(&contents, "flags");
        assert!(body.starts_with("((bool, &str)) ("));
    }
}
