use clap::Parser;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install from a local directory:\n    featurekit install ./primitives_to_install\n\n\
                   Install from an archive:\n    featurekit install ./primitives.tar.gz\n\n\
                   Install from S3 or HTTPS:\n    featurekit install s3://bucket/primitives.tar.gz\n    \
                   featurekit install https://example.com/primitives.zip\n\n\
                   Install without confirmation:\n    featurekit install ./primitives -y")]
pub struct InstallArgs {
    /// Primitive source: directory, .tar.gz/.tgz/.zip archive, or s3:// / https:// URL
    pub source: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}
