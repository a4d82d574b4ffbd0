use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const DAY_CSV: &str = "\
instant,dteday,season,yr,mnth,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt
1,2011-01-01,1,0,1,0,6,0,2,0.344167,0.363625,0.805833,0.160446,331,654,985
2,2011-01-02,1,0,1,0,0,0,2,0.363478,0.353739,0.696087,0.248539,131,670,801
3,2011-01-03,1,0,1,0,1,1,1,0.196364,0.189405,0.437273,0.248309,120,1229,1349
4,2011-01-04,1,0,1,0,2,1,1,0.2,0.212122,0.590435,0.160296,108,1454,1562
5,2012-01-01,1,1,1,0,0,0,1,0.37,0.375621,0.6925,0.192167,686,1608,2294
6,2012-01-02,1,1,1,1,1,0,1,0.273043,0.252304,0.381304,0.329665,244,1707,1951
7,2012-01-03,1,1,1,0,2,1,1,0.15,0.126275,0.44125,0.365671,89,2147,2236
";

pub const HOUR_CSV: &str = "\
instant,dteday,season,yr,mnth,hr,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt
1,2011-01-01,1,0,1,0,0,6,0,1,0.24,0.2879,0.81,0,3,13,120
2,2011-01-01,1,0,1,8,0,6,0,1,0.22,0.2727,0.8,0,8,472,480
3,2011-01-03,1,0,1,8,0,1,1,1,0.2,0.197,0.44,0.2836,2,498,500
4,2011-01-03,1,0,1,17,0,1,1,1,0.2,0.197,0.44,0.2836,12,688,700
5,2012-01-02,1,1,1,17,1,1,0,1,0.3,0.29,0.55,0.1045,20,480,500
6,2012-01-03,1,1,1,23,0,2,1,2,0.14,0.15,0.5,0.2239,1,74,75
";

/// Writes `day.csv` and `hour.csv` into a fresh temporary folder.
pub fn data_folder() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().to_path_buf();
    fs::write(path.join("day.csv"), DAY_CSV).unwrap();
    fs::write(path.join("hour.csv"), HOUR_CSV).unwrap();
    (dir, path)
}
