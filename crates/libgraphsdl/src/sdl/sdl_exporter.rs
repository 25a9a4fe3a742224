use crate::ast;
use crate::graph::Directive;
use crate::graph::Field;
use crate::graph::FieldOption;
use crate::graph::Graph;
use crate::graph::Link;
use crate::graph::Node;
use crate::graph::NodeMember;
use crate::graph::Record;
use crate::graph::Root;
use crate::sdl::encode::ANY_SCALAR_NAME;
use crate::sdl::encode::encode_default_value;
use crate::sdl::encode::encode_directive_arg_type;
use crate::sdl::encode::encode_type;
use crate::sdl::SdlExportError;
use crate::visitor::GraphVisitor;
use crate::visitor::Visitable;

type Result<T> = std::result::Result<T, SdlExportError>;

/// Name of the (pre-existing) type that the query root extends.
pub const QUERY_TYPE_NAME: &str = "Query";

/// A [`GraphVisitor`] that turns a graph into a flat list of top-level
/// schema definitions, in this order:
///
///  1. `scalar Any`
///  2. one object type per data type, in declaration order
///  3. for each graph item, in declaration order: `extend type Query { ... }`
///     for root fragments and an object type for named nodes
///
/// The exporter is single-use: each [`SdlExporter::export`] call starts from
/// a fresh instance. Its buffers only collect the children of the entity
/// currently being exported.
#[derive(Debug, Default)]
pub struct SdlExporter {
    definitions: Vec<ast::schema::Definition>,
    fields: Vec<ast::schema::Field>,
    arguments: Vec<ast::schema::InputValue>,
}
impl SdlExporter {
    pub fn export(graph: &Graph) -> Result<Vec<ast::schema::Definition>> {
        let mut exporter = Self::default();
        graph.accept(&mut exporter)?;
        log::debug!(
            "Exported {} SDL definitions.",
            exporter.definitions.len(),
        );
        Ok(exporter.definitions)
    }

    fn any_scalar() -> ast::schema::Definition {
        ast::schema::Definition::TypeDefinition(
            ast::schema::TypeDefinition::Scalar(ast::schema::ScalarType {
                position: ast::synthetic_pos(),
                description: None,
                name: ANY_SCALAR_NAME.to_string(),
                directives: vec![],
            }),
        )
    }

    fn field_definitions(
        &mut self,
        members: &[NodeMember],
    ) -> Result<Vec<ast::schema::Field>> {
        for member in members {
            member.accept(self)?;
        }
        Ok(std::mem::take(&mut self.fields))
    }

    fn input_values(
        &mut self,
        options: &[FieldOption],
    ) -> Result<Vec<ast::schema::InputValue>> {
        for option in options {
            option.accept(self)?;
        }
        Ok(std::mem::take(&mut self.arguments))
    }

    fn directives(
        directives: &[Directive],
    ) -> Result<Vec<ast::query::Directive>> {
        directives.iter().map(Self::directive).collect()
    }

    fn directive(directive: &Directive) -> Result<ast::query::Directive> {
        let mut arguments = vec![];
        for arg in directive.args() {
            let literal_kind = encode_directive_arg_type(arg.arg_type())?;
            arguments.push((
                arg.name().to_string(),
                literal_kind.literal(arg.value())?,
            ));
        }
        Ok(ast::query::Directive {
            position: ast::synthetic_pos(),
            name: directive.name().to_string(),
            arguments,
        })
    }
}

impl GraphVisitor for SdlExporter {
    type Error = SdlExportError;

    fn visit_graph(&mut self, graph: &Graph) -> Result<()> {
        self.definitions.push(Self::any_scalar());
        for (type_name, record) in graph.data_types() {
            self.visit_record(type_name, record)?;
        }
        for item in graph.items() {
            item.accept(self)?;
        }
        Ok(())
    }

    /// Records are structural: their fields never take arguments or carry
    /// directives.
    fn visit_record(&mut self, type_name: &str, record: &Record) -> Result<()> {
        let mut fields = vec![];
        for (field_name, type_expr) in record.field_types() {
            fields.push(ast::schema::Field {
                position: ast::synthetic_pos(),
                description: None,
                name: field_name.to_string(),
                arguments: vec![],
                field_type: encode_type(type_expr.as_ref())?,
                directives: vec![],
            });
        }
        self.definitions.push(ast::schema::Definition::TypeDefinition(
            ast::schema::TypeDefinition::Object(ast::schema::ObjectType {
                position: ast::synthetic_pos(),
                description: None,
                name: type_name.to_string(),
                implements_interfaces: vec![],
                directives: vec![],
                fields,
            }),
        ));
        Ok(())
    }

    fn visit_root(&mut self, root: &Root) -> Result<()> {
        let fields = self.field_definitions(root.fields())?;
        self.definitions.push(ast::schema::Definition::TypeExtension(
            ast::schema::TypeExtension::Object(
                ast::schema::ObjectTypeExtension {
                    position: ast::synthetic_pos(),
                    name: QUERY_TYPE_NAME.to_string(),
                    implements_interfaces: vec![],
                    directives: vec![],
                    fields,
                },
            ),
        ));
        Ok(())
    }

    fn visit_node(&mut self, node: &Node) -> Result<()> {
        let fields = self.field_definitions(node.fields())?;
        self.definitions.push(ast::schema::Definition::TypeDefinition(
            ast::schema::TypeDefinition::Object(ast::schema::ObjectType {
                position: ast::synthetic_pos(),
                description: node.description().map(str::to_string),
                name: node.name().to_string(),
                implements_interfaces: vec![],
                directives: Self::directives(node.directives())?,
                fields,
            }),
        ));
        Ok(())
    }

    fn visit_field(&mut self, field: &Field) -> Result<()> {
        let arguments = self.input_values(field.options())?;
        self.fields.push(ast::schema::Field {
            position: ast::synthetic_pos(),
            description: field.description().map(str::to_string),
            name: field.name().to_string(),
            arguments,
            field_type: encode_type(field.type_expr())?,
            directives: Self::directives(field.directives())?,
        });
        Ok(())
    }

    // Link directives are not exported.
    fn visit_link(&mut self, link: &Link) -> Result<()> {
        let arguments = self.input_values(link.options())?;
        self.fields.push(ast::schema::Field {
            position: ast::synthetic_pos(),
            description: link.description().map(str::to_string),
            name: link.name().to_string(),
            arguments,
            field_type: encode_type(Some(link.type_expr()))?,
            directives: vec![],
        });
        Ok(())
    }

    fn visit_option(&mut self, option: &FieldOption) -> Result<()> {
        self.arguments.push(ast::schema::InputValue {
            position: ast::synthetic_pos(),
            description: option.description().map(str::to_string),
            name: option.name().to_string(),
            value_type: encode_type(option.type_expr())?,
            default_value: encode_default_value(option.default())?,
            directives: vec![],
        });
        Ok(())
    }
}
