use aws_config::SdkConfig;
use aws_types::region::Region;

/// Root context for a deployment. Owns the loaded SDK configuration and the
/// names of the stacks registered against it.
pub struct App {
    sdk_config: SdkConfig,
    stack_names: Vec<String>,
}

impl App {
    pub async fn new(region: &str) -> Self {
        let region = Region::new(region.to_owned());
        let sdk_config = aws_config::from_env().region(region).load().await;

        return Self {
            sdk_config,
            stack_names: Vec::new(),
        };
    }

    pub fn stack_names(&self) -> &[String] {
        return &self.stack_names;
    }
}

/// Account and region the stack is provisioned into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub account: String,
    pub region: String,
}

pub struct StackProps {
    pub environment: Environment,
    pub description: String,
}

pub struct Stack {
    pub stack_name: String,
    pub environment: Environment,
    pub description: String,

    client: aws_sdk_cloudformation::Client,
}

impl Stack {
    /// Registers the stack with the app. Construction only builds the client
    /// and records the name; no call is made to the control plane.
    pub async fn new(app: &mut App, stack_name: &str, props: StackProps) -> Self {
        let client = aws_sdk_cloudformation::Client::new(&app.sdk_config);
        app.stack_names.push(String::from(stack_name));

        return Self {
            stack_name: String::from(stack_name),
            environment: props.environment,
            description: props.description,
            client,
        };
    }

    /// Client the provisioning workflow drives once the stack is registered.
    pub fn client(&self) -> &aws_sdk_cloudformation::Client {
        return &self.client;
    }
}
