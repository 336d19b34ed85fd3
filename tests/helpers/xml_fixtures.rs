//! XML documents shared by the integration tests.

/// One package and one element that references it.
pub const SCENARIO_A: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<EAExport>
  <Package Id="P1" Name="Core"/>
  <Element Id="E1" Name="Order" Type="Class" PackageID="P1"/>
</EAExport>"#;

/// Same content, element nested inside its package.
pub const SCENARIO_A_NESTED: &str = r#"<EAExport>
  <Package Id="P1" Name="Core">
    <Element Id="E1" Name="Order" Type="Class" PackageID="P1"/>
  </Package>
</EAExport>"#;

/// A connector whose target does not exist.
pub const SCENARIO_B: &str = r#"<EAExport>
  <Element Id="E1" Name="Order" Type="Class"/>
  <Connector Id="C1" Type="Association" SourceID="E1" TargetID="E2"/>
</EAExport>"#;

/// One diagram with an encoded payload, one without any.
pub const SCENARIO_C: &str = r#"<EAExport>
  <Diagrams>
    <Diagram Id="D1" Name="With image" Type="Logical">
      <png>iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==</png>
    </Diagram>
    <Diagram Id="D2" Name="Plain" Type="Logical">
      <Notes>nothing to see</Notes>
    </Diagram>
  </Diagrams>
</EAExport>"#;

/// Broken beyond every recovery strategy.
pub const SCENARIO_D: &str = r#"<EAExport><Package Id="P1" Name="Core"></EAExport"#;

/// A native-style export exercising every facet.
pub const EA_NATIVE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<EAExport>
  <Model Name="Shop" Id="M1" Type="UML Model" Created="2021-03-01" Modified="2021-04-01">
    <Documentation>Order handling model</Documentation>
  </Model>
  <Packages>
    <Package Id="P2" Name="Billing" ParentID="P1" Author="ann" Version="1.1"/>
    <Package Id="P1" Name="Root" Author="ann" Version="1.0" Stereotype="system">
      <Notes>Top level</Notes>
    </Package>
  </Packages>
  <Elements>
    <Element Id="E1" Name="Order" Type="Class" PackageID="P1" Author="bob" Abstract="true">
      <Attributes>
        <Attribute Id="A1" Name="id" Type="int" Visibility="private" Static="false"/>
        <Attribute Id="A2" Name="total" Type="decimal" Default="0"/>
      </Attributes>
      <Operations>
        <Operation Id="O1" Name="close" Type="void" Visibility="public">
          <Parameters>
            <Parameter Name="reason" Type="string" Kind="in"/>
          </Parameters>
        </Operation>
      </Operations>
    </Element>
    <Element Id="E2" Name="Invoice" Type="Class" PackageID="P2" Author="carol" Version="2.0"/>
    <Element Id="E3" Name="Customer" Type="Actor" PackageID="P1"/>
  </Elements>
  <Connectors>
    <Connector Id="C1" Name="bills" Type="Association" SourceID="E1" TargetID="E2" Direction="Source -&gt; Destination">
      <SourceRole Name="order" Multiplicity="1"/>
      <TargetRole Name="invoices" Multiplicity="0..*"/>
    </Connector>
    <Connector Id="C2" Type="Dependency" SourceID="E3" TargetID="E1"/>
  </Connectors>
  <Diagrams>
    <Diagram Id="D1" Name="Overview" Type="Logical" PackageID="P1" Author="ann" SwimLanes="locked=false;" Scale="100">
      <DiagramObjects>
        <DiagramObject Object_ID="E1" left="10" top="10" right="120" bottom="80" Sequence="1"/>
        <DiagramObject Object_ID="E2" left="200" top="10" right="320" bottom="80" Sequence="2"/>
      </DiagramObjects>
      <Image>QUJDREVGR0g=</Image>
    </Diagram>
    <Diagram Id="D2" Name="External" Type="Use Case" ImageFile="diagrams/external.png"/>
  </Diagrams>
  <TaggedValues>
    <TaggedValue ElementID="E1" Name="persistence" Value="table"/>
    <TaggedValue ElementID="E1" Name="owner">team-a</TaggedValue>
    <TaggedValue ElementID="E2" Name="archived" Value="false"/>
    <TaggedValue Name="orphan" Value="dropped"/>
  </TaggedValues>
</EAExport>"#;

/// An XMI export using `uml:`/`xmi:` prefixes without declaring them.
pub const XMI_UNDECLARED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xmi:XMI xmi:version="2.1">
  <uml:Model xmi:type="uml:Model" name="EA_Model">
    <packagedElement xmi:type="uml:Package" xmi:id="EAPK_1" name="Domain">
      <packagedElement xmi:type="uml:Class" xmi:id="EAID_1" name="Order">
        <ownedAttribute xmi:id="EAID_A1" name="id" visibility="private"/>
        <ownedOperation xmi:id="EAID_O1" name="close">
          <ownedParameter xmi:id="EAID_R1" name="return" direction="return"/>
        </ownedOperation>
      </packagedElement>
      <packagedElement xmi:type="uml:Association" xmi:id="EAID_X1" name="link"/>
    </packagedElement>
  </uml:Model>
  <xmi:Extension extender="Enterprise Architect">
    <elements>
      <element xmi:idref="EAID_1" xmi:type="uml:Class" name="Order"/>
    </elements>
    <diagrams>
      <diagram xmi:id="EAID_D1">
        <elements>
          <element geometry="Left=10;Top=10;Right=110;Bottom=80;" subject="EAID_1" seqno="1"/>
        </elements>
      </diagram>
    </diagrams>
  </xmi:Extension>
</xmi:XMI>"#;
