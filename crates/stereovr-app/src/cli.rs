use clap::Parser;
use stereovr_common::StereoFormat;
use stereovr_config::StereoConfig;

/// stereovr: a stereoscopic 360°/180° video viewer.
#[derive(Parser, Debug)]
#[command(name = "stereovr", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error) or a full filter directive.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Image file to show on the video spheres.
    #[arg(long)]
    pub video: Option<String>,

    /// Stereo layout of the source (mono, sbs, tb).
    #[arg(short = 'f', long)]
    pub format: Option<StereoFormat>,

    /// Treat the source as a 180° capture.
    #[arg(long)]
    pub wide: bool,

    /// Number of hand controllers to expect (0-2).
    #[arg(long)]
    pub controllers: Option<u32>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut StereoConfig) {
        if let Some(ref video) = self.video {
            config.video.source = Some(video.clone());
        }
        if let Some(format) = self.format {
            config.video.format = format;
        }
        if self.wide {
            config.video.wide_field = true;
        }
        if let Some(count) = self.controllers {
            config.controllers.count = count;
        }
    }

    /// The tracing directive to use when none is given on the command line.
    pub fn log_directive(&self, config: &StereoConfig) -> String {
        match self.log_level {
            Some(ref level) if !level.contains('=') => format!("stereovr={level}"),
            Some(ref directive) => directive.clone(),
            None => config.logging.level.directive().to_string(),
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_to_config() {
        let args = Args::try_parse_from([
            "stereovr",
            "--video",
            "/tmp/pano.jpg",
            "-f",
            "sbs",
            "--wide",
            "--controllers",
            "1",
        ])
        .unwrap();
        let mut config = StereoConfig::default();
        args.apply_overrides(&mut config);

        assert_eq!(config.video.source.as_deref(), Some("/tmp/pano.jpg"));
        assert_eq!(config.video.format, StereoFormat::SideBySide);
        assert!(config.video.wide_field);
        assert_eq!(config.controllers.count, 1);
    }

    #[test]
    fn no_flags_leave_config_untouched() {
        let args = Args::try_parse_from(["stereovr"]).unwrap();
        let mut config = StereoConfig::default();
        args.apply_overrides(&mut config);
        assert_eq!(
            stereovr_config::config_to_json(&config),
            stereovr_config::config_to_json(&StereoConfig::default())
        );
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Args::try_parse_from(["stereovr", "--format", "anaglyph"]).is_err());
    }

    #[test]
    fn log_directive_precedence() {
        let config = StereoConfig::default();
        let args = Args::try_parse_from(["stereovr"]).unwrap();
        assert_eq!(args.log_directive(&config), "stereovr=info");

        let args = Args::try_parse_from(["stereovr", "--log-level", "debug"]).unwrap();
        assert_eq!(args.log_directive(&config), "stereovr=debug");

        let args = Args::try_parse_from(["stereovr", "--log-level", "wgpu_core=warn"]).unwrap();
        assert_eq!(args.log_directive(&config), "wgpu_core=warn");
    }
}
