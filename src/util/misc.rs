use std::fmt;

use crate::error;

pub type Res<T = ()> = Result<T, Box<dyn std::error::Error>>;

pub fn next_value<T>(it: &mut std::slice::Iter<'_, std::string::String>, opt: &str) -> T
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    let n = it
        .next()
        .unwrap_or_else(|| error_exit(format!("{}: value missing", opt)));
    n.parse()
        .unwrap_or_else(|e| error_exit(format!("{}: {} '{}'", opt, e, n)))
}

pub fn sleep(sec: f64) {
    std::thread::sleep(std::time::Duration::from_millis((sec * 1000.0) as u64));
}

pub fn unixtime_now() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_millis() as f64
        / 1000.0
}

pub fn error_exit<T: fmt::Display, U>(t: T) -> U {
    error!("{}", t);
    std::process::exit(1);
}

pub fn write_to_file(file_path: &str, data: &str) -> Res {
    use std::io::Write;
    let path = std::path::Path::new(file_path);
    let prefix = path.parent().ok_or("invalid path")?;
    std::fs::create_dir_all(prefix)?;
    let mut f = std::fs::File::create(path)?;
    write!(f, "{}", data)?;
    Ok(())
}

pub fn vec_to_string<T: fmt::Display>(v: &[T]) -> String {
    let vs: Vec<String> = v.iter().map(|x| format!("{}", x)).collect();
    "[".to_string() + &vs.join(", ") + "]"
}
